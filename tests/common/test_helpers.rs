use std::path::PathBuf;

/// Test fixture paths
pub struct TestFixtures {
    pub fixtures_dir: PathBuf,
}

impl TestFixtures {
    pub fn new() -> Self {
        let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures");

        Self { fixtures_dir }
    }

    /// validator.w3.org result for http://www.google.com/: 65 errors, 19 warnings
    pub fn errors_and_warnings_xml(&self) -> PathBuf {
        self.fixtures_dir.join("errors_and_warnings.xml")
    }

    /// SOAP 1.2 fault whose reason mentions line 217
    pub fn fault_xml(&self) -> PathBuf {
        self.fixtures_dir.join("fault.xml")
    }

    /// SOAP 1.2 fault without any line reference
    pub fn fault_without_line_xml(&self) -> PathBuf {
        self.fixtures_dir.join("fault_without_line.xml")
    }

    /// Errors with missing line, col and message children
    pub fn partial_fields_xml(&self) -> PathBuf {
        self.fixtures_dir.join("partial_fields.xml")
    }

    pub fn read(&self, path: PathBuf) -> String {
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
    }
}

pub const GOOGLE_URI: &str = "http://www.google.com/";

/// Build a SOAP 1.2 validation response with `(line, col, message)` errors and warnings
pub fn validation_response(
    uri: &str,
    errors: &[(&str, &str, &str)],
    warnings: &[(&str, &str, &str)],
) -> String {
    let items = |tag: &str, list: &[(&str, &str, &str)]| -> String {
        list.iter()
            .map(|(line, col, message)| {
                format!(
                    "<m:{tag}><m:line>{line}</m:line><m:col>{col}</m:col><m:message>{message}</m:message></m:{tag}>\n"
                )
            })
            .collect()
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
<env:Body>
<m:markupvalidationresponse xmlns:m="http://www.w3.org/2005/10/markup-validator">
<m:uri>{uri}</m:uri>
<m:errors><m:errorlist>
{}</m:errorlist></m:errors>
<m:warnings><m:warninglist>
{}</m:warninglist></m:warnings>
</m:markupvalidationresponse>
</env:Body>
</env:Envelope>"#,
        items("error", errors),
        items("warning", warnings)
    )
}

/// Build a SOAP 1.1 fault with the given fault string
pub fn soap11_fault(faultstring: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Body>
<SOAP-ENV:Fault>
<faultcode>SOAP-ENV:Server</faultcode>
<faultstring>{faultstring}</faultstring>
</SOAP-ENV:Fault>
</SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
    )
}
