mod errors;
mod html;
mod text;

use std::io::Write;

use clap::ValueEnum;

use crate::models::StatementResult;
use crate::types::UserId;

pub use errors::ViewError;
pub use html::render_html;
pub use text::{render_text, write_csv, write_json};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Html
}

/// What the page shows around a statement, passed in rather than held globally.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Name chosen in the user select control; the statement's own name is used when absent.
    pub display_name: Option<String>,
    /// User picked in the user select control, if any.
    pub selected_user: Option<UserId>,
    pub loader_visible: bool
}

impl ViewContext {
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_selected_user(mut self, user_id: UserId) -> Self {
        self.selected_user = Some(user_id);
        self
    }

    pub fn user_name<'a>(&'a self, statement: &'a StatementResult) -> &'a str {
        self.display_name.as_deref().unwrap_or(&statement.user_name)
    }
}

pub fn render<W: Write>(format: OutputFormat, statement: &StatementResult, context: &ViewContext, mut writer: W) -> Result<(), ViewError> {
    match format {
        OutputFormat::Text => writer.write_all(render_text(statement, context).as_bytes())?,
        OutputFormat::Html => writer.write_all(render_html(statement, context).as_bytes())?,
        OutputFormat::Json => write_json(statement, &mut writer)?,
        OutputFormat::Csv => write_csv(statement, &mut writer)?
    }

    writer.flush()?;

    Ok(())
}
