//! Typed command bodies, one visitor per subcommand.

use anyhow::{Context, Result};
use rustack_query::{marshall_request, response_to_xml, unmarshall_response};
use rustack_redshift_model::{API_VERSION, Operation, OperationVisitor, XML_NAMESPACE};

/// Flatten a JSON input into a form-encoded request body.
pub struct Encode<'a> {
    pub json: &'a [u8],
}

impl OperationVisitor for Encode<'_> {
    type Output = Result<String>;

    fn visit<O: Operation>(self) -> Self::Output {
        let name = O::OPERATION.as_str();
        let input: O::Input = serde_json::from_slice(self.json)
            .with_context(|| format!("invalid JSON for {name} input"))?;
        let params = marshall_request(Some(&input), name, API_VERSION)?;
        Ok(params.to_form_body())
    }
}

/// Decode an XML response document into pretty-printed JSON.
pub struct Decode<'a> {
    pub xml: &'a [u8],
}

impl OperationVisitor for Decode<'_> {
    type Output = Result<String>;

    fn visit<O: Operation>(self) -> Self::Output {
        let output: O::Output = unmarshall_response(self.xml)
            .with_context(|| format!("invalid {} response document", O::OPERATION))?;
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// Render a JSON output as a complete XML response document.
pub struct Respond<'a> {
    pub json: &'a [u8],
    pub request_id: &'a str,
}

impl OperationVisitor for Respond<'_> {
    type Output = Result<String>;

    fn visit<O: Operation>(self) -> Self::Output {
        let name = O::OPERATION.as_str();
        let output: O::Output = serde_json::from_slice(self.json)
            .with_context(|| format!("invalid JSON for {name} output"))?;
        let xml = response_to_xml(name, XML_NAMESPACE, self.request_id, &output)?;
        String::from_utf8(xml).context("response document is not UTF-8")
    }
}
