//! Generic HTML table rendering.
//!
//! A [`TabularRenderer`] is configured once with a [`TableSpec`] (element id,
//! CSS class and the ordered columns) and then turns any sequence of items
//! into a table by asking a row callback for one [`Row`] per item. Header
//! text is escaped; cell markup produced by the callback is inserted as is.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::RenderError;
use crate::templates::{environment, Templates};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Machine name, also emitted as a CSS class on every cell of the column.
    pub name: String,
    pub header: String,
}

impl Column {
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: header.into(),
        }
    }
}

/// One rendered row. Cells hold markup, one per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub class: Option<String>,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub id: String,
    pub class: String,
    pub columns: Vec<Column>,
}

pub struct TabularRenderer {
    env: Environment<'static>,
    spec: TableSpec,
}

impl TabularRenderer {
    pub fn new(spec: TableSpec) -> Result<Self, RenderError> {
        Ok(Self {
            env: environment(&[Templates::Table])?,
            spec,
        })
    }

    /// Renders the header plus one row per item, in iteration order.
    ///
    /// The first failing row aborts the whole table.
    pub fn render<I, F>(&self, items: I, mut row_for: F) -> Result<String, RenderError>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Result<Row, RenderError>,
    {
        let mut rows = Vec::new();
        for item in items {
            let row = row_for(item)?;
            if row.cells.len() != self.spec.columns.len() {
                return Err(RenderError::column_mismatch(
                    self.spec.columns.len(),
                    row.cells.len(),
                ));
            }
            rows.push(row);
        }

        let template = self.env.get_template(Templates::Table.name())?;
        Ok(template.render(context! {
            id => &self.spec.id,
            class => &self.spec.class,
            columns => &self.spec.columns,
            rows => rows,
        })?)
    }
}
