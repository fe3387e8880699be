//! Response classification
//!
//! Decides whether a parsed SOAP payload is a markup validation result or a
//! SOAP fault. Elements are matched by local name only, since deployments
//! bind different prefixes (`m:`, `env:`, `soap:`, none) to the same elements.

use roxmltree::{Document, Node};

use crate::error::{ParseError, Result};

/// Element wrapping a normal validation result
pub const RESPONSE_TAG: &str = "markupvalidationresponse";
/// Element carrying the validated document URI
pub const URI_TAG: &str = "uri";
/// SOAP fault indicator (1.1 and 1.2)
pub const FAULT_TAG: &str = "Fault";

/// The shape of a validator response
#[derive(Debug, Clone)]
pub enum ResponseKind<'a, 'input> {
    /// A validation result for `uri`; diagnostics live beneath `response`
    Validation {
        uri: String,
        response: Node<'a, 'input>,
    },
    /// A SOAP fault with its fault text
    Fault { text: String },
}

/// Classify a parsed payload.
///
/// A validation response needs a non-empty `uri` beneath the
/// `markupvalidationresponse` element. Failing that, any `Fault` element makes
/// the payload a fault. Anything else is [`ParseError::Unrecognized`].
pub fn classify<'a, 'input>(doc: &'a Document<'input>) -> Result<ResponseKind<'a, 'input>> {
    let root = doc.root_element();

    if let Some(response) = find_descendant(root, RESPONSE_TAG)
        && let Some(uri) = find_descendant(response, URI_TAG)
            .map(element_text)
            .filter(|uri| !uri.is_empty())
    {
        return Ok(ResponseKind::Validation { uri, response });
    }

    if let Some(fault) = find_descendant(root, FAULT_TAG) {
        let text = fault_text(fault);
        if text.is_empty() {
            return Err(ParseError::EmptyFault);
        }
        return Ok(ResponseKind::Fault { text });
    }

    Err(ParseError::Unrecognized)
}

/// Fault text: SOAP 1.1 `faultstring`, then SOAP 1.2 `Reason/Text`, then the
/// whole fault element's text
fn fault_text(fault: Node) -> String {
    if let Some(text) = find_descendant(fault, "faultstring").map(element_text)
        && !text.is_empty()
    {
        return text;
    }

    if let Some(text) = find_descendant(fault, "Reason")
        .and_then(|reason| find_descendant(reason, "Text"))
        .map(element_text)
        && !text.is_empty()
    {
        return text;
    }

    element_text(fault)
}

/// First element below `node` (depth-first, document order) with local name `name`
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Element children of `node`, skipping text, comments and processing instructions
pub fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// All text beneath `node` (CDATA included), trimmed
pub fn element_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
  <env:Body>
    <m:markupvalidationresponse xmlns:m="http://www.w3.org/2005/10/markup-validator">
      <m:uri> http://example.com/ </m:uri>
    </m:markupvalidationresponse>
  </env:Body>
</env:Envelope>"#;

    #[test]
    fn test_classify_validation_response() {
        let doc = Document::parse(VALIDATION).unwrap();
        match classify(&doc).unwrap() {
            ResponseKind::Validation { uri, response } => {
                assert_eq!(uri, "http://example.com/");
                assert_eq!(response.tag_name().name(), RESPONSE_TAG);
            }
            other => panic!("Expected validation response, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_ignores_prefix_bindings() {
        let xml = r#"<soap:Envelope xmlns:soap="urn:soap">
  <soap:Body>
    <v:markupvalidationresponse xmlns:v="urn:other-binding">
      <v:uri>http://example.org/page</v:uri>
    </v:markupvalidationresponse>
  </soap:Body>
</soap:Envelope>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(matches!(
            classify(&doc).unwrap(),
            ResponseKind::Validation { ref uri, .. } if uri == "http://example.org/page"
        ));
    }

    #[test]
    fn test_classify_soap11_fault() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <SOAP-ENV:Fault>
      <faultcode>SOAP-ENV:Server</faultcode>
      <faultstring>  parse error at line 12  </faultstring>
    </SOAP-ENV:Fault>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;
        let doc = Document::parse(xml).unwrap();
        match classify(&doc).unwrap() {
            ResponseKind::Fault { text } => assert_eq!(text, "parse error at line 12"),
            other => panic!("Expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_soap12_fault() {
        let xml = r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
  <env:Body>
    <env:Fault>
      <env:Code><env:Value>env:Receiver</env:Value></env:Code>
      <env:Reason><env:Text xml:lang="en">broken at line 3</env:Text></env:Reason>
    </env:Fault>
  </env:Body>
</env:Envelope>"#;
        let doc = Document::parse(xml).unwrap();
        match classify(&doc).unwrap() {
            ResponseKind::Fault { text } => assert_eq!(text, "broken at line 3"),
            other => panic!("Expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_empty_uri_falls_through() {
        let xml = r#"<Envelope><Body><markupvalidationresponse><uri>  </uri></markupvalidationresponse></Body></Envelope>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(matches!(classify(&doc), Err(ParseError::Unrecognized)));
    }

    #[test]
    fn test_classify_empty_fault() {
        let xml = r#"<Envelope><Body><Fault/></Body></Envelope>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(matches!(classify(&doc), Err(ParseError::EmptyFault)));
    }

    #[test]
    fn test_classify_unrecognized() {
        let doc = Document::parse("<Envelope><Body><other/></Body></Envelope>").unwrap();
        assert!(matches!(classify(&doc), Err(ParseError::Unrecognized)));
    }

    #[test]
    fn test_element_text_includes_cdata() {
        let doc = Document::parse("<a>  <b>x</b><![CDATA[<y>]]>  </a>").unwrap();
        assert_eq!(element_text(doc.root_element()), "x<y>");
    }

    #[test]
    fn test_child_elements_skip_text() {
        let doc = Document::parse("<a> text <b/><!-- c --><d/> </a>").unwrap();
        let names: Vec<&str> = child_elements(doc.root_element())
            .map(|n| n.tag_name().name())
            .collect();
        assert_eq!(names, vec!["b", "d"]);
    }
}
