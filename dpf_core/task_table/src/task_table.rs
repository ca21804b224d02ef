use common::{Displayable, Scheduled, TaskId, TaskRecord};
use minijinja::{context, Environment, HtmlEscape};
use serde::Serialize;
use tracing::debug;

use crate::clock::{displayed_next_run, Clock};
use crate::error::RenderError;
use crate::i18n::{Localizer, TASKS_DOMAIN};
use crate::icons::{Icon, IconResolver};
use crate::table_id::TableId;
use crate::tabular::{Column, Row, TableSpec, TabularRenderer};
use crate::templates::{environment, Templates};
use crate::urls::{TaskEndpoint, UrlBuilder};

pub const DEFAULT_TABLE_CLASS: &str = "generaltable admintable";
pub const DIMMED_CLASS: &str = "dimmed_text";

/// Column names with the string key and domain of their header.
const COLUMNS: [(&str, Option<&str>); 6] = [
    ("source", Some(TASKS_DOMAIN)),
    ("target", Some(TASKS_DOMAIN)),
    ("processor", Some(TASKS_DOMAIN)),
    ("schedule", Some(TASKS_DOMAIN)),
    ("enabled", Some(TASKS_DOMAIN)),
    ("actions", None),
];

/// Services the task table reads from while rendering.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub strings: &'a dyn Localizer,
    pub icons: &'a dyn IconResolver,
    pub urls: &'a dyn UrlBuilder,
    pub clock: &'a dyn Clock,
}

#[derive(Debug, Serialize)]
struct ActionLink {
    url: String,
    icon: String,
    title: String,
}

/// Admin listing of ETL tasks: one row per task with its source, target,
/// processor, schedule, status and action links.
pub struct TaskTable<'a> {
    id: TableId,
    table: TabularRenderer,
    cells: Environment<'static>,
    deps: Collaborators<'a>,
}

impl<'a> TaskTable<'a> {
    pub fn new(
        id: TableId,
        class: impl Into<String>,
        deps: Collaborators<'a>,
    ) -> Result<Self, RenderError> {
        let columns = COLUMNS
            .iter()
            .map(|(name, domain)| -> Result<Column, RenderError> {
                Ok(Column::new(*name, deps.strings.get_string(name, *domain)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let table = TabularRenderer::new(TableSpec {
            id: id.to_string(),
            class: class.into(),
            columns,
        })?;

        Ok(Self {
            id,
            table,
            cells: environment(&[Templates::Item, Templates::Schedule, Templates::Actions])?,
            deps,
        })
    }

    /// Renders the whole table. Rows keep the order of `tasks`; an empty
    /// slice yields the header alone.
    pub fn render<T: TaskRecord>(&self, tasks: &[T]) -> Result<String, RenderError> {
        let html = self.table.render(tasks, |task| self.display_task(task))?;
        debug!(table = %self.id, rows = tasks.len(), "rendered task table");
        Ok(html)
    }

    fn display_task(&self, task: &dyn TaskRecord) -> Result<Row, RenderError> {
        let (class, enabled_key) = if task.is_enabled() {
            (None, "yes")
        } else {
            (Some(DIMMED_CLASS.to_string()), "no")
        };
        let enabled = HtmlEscape(&self.deps.strings.get_string(enabled_key, None)?).to_string();

        Ok(Row {
            class,
            cells: vec![
                self.display_item(task.id(), "source", task.source())?,
                self.display_item(task.id(), "target", task.target())?,
                self.display_item(task.id(), "processor", task.processor())?,
                self.display_schedule(task.id(), task.schedule())?,
                enabled,
                self.action_buttons(task)?,
            ],
        })
    }

    fn display_item(
        &self,
        id: TaskId,
        field: &str,
        item: &dyn Displayable,
    ) -> Result<String, RenderError> {
        let name = item.name();
        if name.trim().is_empty() {
            return Err(RenderError::malformed_task(id, field));
        }

        let settings = item
            .settings_for_display()
            .map_err(|e| RenderError::invalid_settings(id, field, e))?;

        let template = self.cells.get_template(Templates::Item.name())?;
        Ok(template.render(context! {
            name => name,
            settings => settings,
        })?)
    }

    fn display_schedule(&self, id: TaskId, schedule: &dyn Scheduled) -> Result<String, RenderError> {
        let description = schedule.formatted();
        if description.trim().is_empty() {
            return Err(RenderError::malformed_task(id, "schedule"));
        }

        let next_run = match schedule.next_run() {
            Some(next) => {
                let shown = displayed_next_run(next, self.deps.clock.now());
                Some(self.deps.strings.format_datetime(shown)?)
            }
            None => None,
        };

        let template = self.cells.get_template(Templates::Schedule.name())?;
        Ok(template.render(context! {
            description => description,
            next_run => next_run,
        })?)
    }

    fn action_buttons(&self, task: &dyn TaskRecord) -> Result<String, RenderError> {
        let (toggle_icon, toggle_title) = if task.is_enabled() {
            (Icon::Hide, "disable")
        } else {
            (Icon::Show, "enable")
        };

        let id = task.id();
        let actions = vec![
            self.action(
                id,
                TaskEndpoint::History,
                Icon::ViewDetails,
                "viewhistory",
                Some(TASKS_DOMAIN),
            )?,
            self.action(id, TaskEndpoint::Status, toggle_icon, toggle_title, None)?,
            self.action(id, TaskEndpoint::Edit, Icon::Edit, "edit", None)?,
            self.action(id, TaskEndpoint::Delete, Icon::Delete, "delete", None)?,
        ];

        let template = self.cells.get_template(Templates::Actions.name())?;
        Ok(template.render(context! { actions => actions })?)
    }

    fn action(
        &self,
        id: TaskId,
        endpoint: TaskEndpoint,
        icon: Icon,
        title_key: &str,
        domain: Option<&str>,
    ) -> Result<ActionLink, RenderError> {
        Ok(ActionLink {
            url: self.deps.urls.task_url(endpoint, id)?,
            icon: self.deps.icons.icon_url(icon.as_str())?,
            title: self.deps.strings.get_string(title_key, domain)?,
        })
    }
}
