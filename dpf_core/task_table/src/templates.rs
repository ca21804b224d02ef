use minijinja::{AutoEscape, Environment};

use crate::error::RenderError;

const TABLE_TEMPLATE: &str = include_str!("templates/table.html.j2");
const ITEM_TEMPLATE: &str = include_str!("templates/item.html.j2");
const SCHEDULE_TEMPLATE: &str = include_str!("templates/schedule.html.j2");
const ACTIONS_TEMPLATE: &str = include_str!("templates/actions.html.j2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Templates {
    Table,
    Item,
    Schedule,
    Actions,
}

impl Templates {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Templates::Table => "table.html",
            Templates::Item => "item.html",
            Templates::Schedule => "schedule.html",
            Templates::Actions => "actions.html",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Templates::Table => TABLE_TEMPLATE,
            Templates::Item => ITEM_TEMPLATE,
            Templates::Schedule => SCHEDULE_TEMPLATE,
            Templates::Actions => ACTIONS_TEMPLATE,
        }
    }
}

/// HTML-escaping environment holding the given templates.
pub(crate) fn environment(templates: &[Templates]) -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    for template in templates {
        env.add_template(template.name(), template.source())?;
    }
    Ok(env)
}
