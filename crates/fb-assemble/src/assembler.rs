//! Template assembly.

use fb_markup::Pipeline;

use crate::block::{BLOCKS, Block, extract_block, strip_code_fences};

/// Assembly failure.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// One or more delimited blocks were not found in the raw output.
    #[error("Could not find delimited blocks: {}", .0.join(", "))]
    MissingBlocks(Vec<String>),
}

/// Assembled newsletter with warnings collected along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub html: String,
    /// Expansion and template warnings, prefixed with the block name.
    pub warnings: Vec<String>,
}

/// Fills the newsletter template from raw generated output.
#[derive(Debug, Default)]
pub struct Assembler {
    pipeline: Pipeline,
}

impl Assembler {
    #[must_use]
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Pipeline used to expand shorthand in each block.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Build the final document from `raw` generator output and `template`.
    ///
    /// Every placeholder occurrence is replaced. Expanded block content is
    /// never rescanned for placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::MissingBlocks`] naming every absent block.
    pub fn assemble(&self, raw: &str, template: &str) -> Result<Assembled, AssembleError> {
        let raw = strip_code_fences(raw);

        let mut missing = Vec::new();
        let mut found = Vec::with_capacity(BLOCKS.len());
        for block in BLOCKS {
            match extract_block(raw, block.name) {
                Some(content) => found.push((block, content)),
                None => missing.push(block.name.to_owned()),
            }
        }
        if !missing.is_empty() {
            return Err(AssembleError::MissingBlocks(missing));
        }

        let mut warnings = Vec::new();
        let mut filled = Vec::with_capacity(found.len());
        for (block, content) in found {
            let rendered = self.pipeline.render(content);
            for warning in rendered.warnings {
                tracing::warn!(block = block.name, "{warning}");
                warnings.push(format!("{}: {warning}", block.name));
            }
            if !template.contains(block.placeholder) {
                tracing::warn!(placeholder = block.placeholder, "Template has no placeholder");
                warnings.push(format!(
                    "{}: template has no {} placeholder",
                    block.name, block.placeholder
                ));
            }
            filled.push((block, rendered.markup));
        }

        let html = fill_template(template, &filled);
        tracing::debug!(chars = html.chars().count(), "Assembled newsletter");

        Ok(Assembled { html, warnings })
    }
}

/// Replace placeholders in one left-to-right scan.
fn fill_template(template: &str, values: &[(Block, String)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(pos) = rest.find("{{") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match values.iter().find(|(block, _)| tail.starts_with(block.placeholder)) {
            Some((block, value)) => {
                out.push_str(value);
                rest = &tail[block.placeholder.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}
