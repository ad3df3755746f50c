//! Output layers handed over by the inference host.

use tracing::debug;

use crate::parser::ParseError;

/// Name of the YOLOX detection output blob.
pub const OUTPUT_BLOB_NAME: &str = "output";

/// One named output blob already copied to host memory.
#[derive(Debug, Clone, Copy)]
pub struct OutputLayer<'a> {
    pub name: &'a str,
    pub buffer: &'a [f32],
}

impl<'a> OutputLayer<'a> {
    pub fn new(name: &'a str, buffer: &'a [f32]) -> Self {
        Self { name, buffer }
    }
}

/// Find the layer called `name`, falling back to the first layer.
pub fn select_output_layer<'l, 'a>(
    layers: &'l [OutputLayer<'a>],
    name: &str,
) -> Result<&'l OutputLayer<'a>, ParseError> {
    if let Some(layer) = layers.iter().find(|layer| layer.name == name) {
        return Ok(layer);
    }

    let first = layers.first().ok_or(ParseError::NoOutputLayer)?;
    debug!(
        wanted = name,
        using = first.name,
        "no output layer with the expected name, using the first layer"
    );
    Ok(first)
}
