use chrono::{DateTime, Duration, Utc};
use common::config::{ParamNaming, SiteConfig};
use common::traits::ToSerdeMap;
use common::types::EtlTask;
use common::{Displayable, Scheduled, TaskId, TaskRecord};
use minijinja::HtmlEscape;
use serde::Serialize;
use std::collections::BTreeMap;
use task_table::{
    Collaborators, FixedClock, IconResolver, RenderError, SiteUrlBuilder, StringCatalog, TableId,
    TaskTable, ThemeIconResolver, DEFAULT_TABLE_CLASS,
};
use test_utils::{csv_processor, fixed_now, sample_task, sftp_target, with_next_run};

const WWWROOT: &str = "https://lms.example.com";

struct Fixture {
    strings: StringCatalog,
    icons: ThemeIconResolver,
    urls: SiteUrlBuilder,
    clock: FixedClock,
}

impl Fixture {
    fn new() -> Self {
        Self::with_naming(ParamNaming::Unified)
    }

    fn with_naming(naming: ParamNaming) -> Self {
        let site = SiteConfig {
            wwwroot: WWWROOT.to_string(),
            theme_revision: 1,
            param_naming: naming,
            ..SiteConfig::default()
        };
        Self {
            strings: StringCatalog::english(),
            icons: ThemeIconResolver::from_site(&site),
            urls: SiteUrlBuilder::new(&site),
            clock: FixedClock(fixed_now()),
        }
    }

    fn deps(&self) -> Collaborators<'_> {
        Collaborators {
            strings: &self.strings,
            icons: &self.icons,
            urls: &self.urls,
            clock: &self.clock,
        }
    }

    fn table(&self) -> TaskTable<'_> {
        TaskTable::new(TableId::explicit("test"), DEFAULT_TABLE_CLASS, self.deps()).unwrap()
    }

    fn render<T: TaskRecord>(&self, tasks: &[T]) -> String {
        self.table().render(tasks).unwrap()
    }
}

fn esc(text: &str) -> String {
    HtmlEscape(text).to_string()
}

fn rows(html: &str) -> Vec<&str> {
    html.split("<tr id=\"")
        .skip(1)
        .map(|chunk| chunk.split("</tr>").next().unwrap_or_default())
        .collect()
}

fn cell<'a>(row: &'a str, column: &str) -> &'a str {
    let marker = format!(" {}\">", column);
    let start = row.find(&marker).expect("column present") + marker.len();
    let end = start + row[start..].find("</td>").expect("cell closed");
    &row[start..end]
}

fn icon(name: &str) -> String {
    esc(&format!("{}/theme/image.php/boost/core/1/{}", WWWROOT, name))
}

#[test]
fn empty_input_renders_headers_only() {
    let html = Fixture::new().render::<EtlTask>(&[]);

    assert!(html.starts_with(r#"<table id="etl-tasks-test" class="generaltable admintable">"#));
    let headers = [
        ("c0 source", "Source"),
        ("c1 target", "Target"),
        ("c2 processor", "Processor"),
        ("c3 schedule", "Schedule"),
        ("c4 enabled", "Enabled"),
        ("c5 actions", "Actions"),
    ];
    let mut last = 0;
    for (class, label) in headers {
        let th = format!(r#"<th class="header {}" scope="col">{}</th>"#, class, label);
        let pos = html.find(&th).unwrap_or_else(|| panic!("missing {th}"));
        assert!(pos > last);
        last = pos;
    }
    assert!(rows(&html).is_empty());
}

#[test]
fn one_row_per_task_in_input_order() {
    let tasks = vec![sample_task(3, true), sample_task(1, false), sample_task(2, true)];

    let html = Fixture::new().render(&tasks);
    let rendered = rows(&html);

    assert_eq!(rendered.len(), 3);
    for (row, id) in rendered.iter().zip([3, 1, 2]) {
        let history = esc(&format!("{}/admin/tool/etl/history.php?id={}", WWWROOT, id));
        assert!(row.contains(&history), "row for task {id} out of order");
    }
}

#[test]
fn disabled_rows_are_dimmed_and_read_no() {
    let tasks = vec![sample_task(1, true), sample_task(2, false)];

    let html = Fixture::new().render(&tasks);
    let rendered = rows(&html);

    assert!(rendered[0].starts_with(r#"etl-tasks-test_r0">"#));
    assert_eq!(cell(rendered[0], "enabled"), "Yes");
    assert!(rendered[1].starts_with(r#"etl-tasks-test_r1" class="dimmed_text">"#));
    assert_eq!(cell(rendered[1], "enabled"), "No");
}

#[test]
fn items_render_name_then_settings() {
    let mut task = sample_task(7, true);
    task.target = sftp_target();
    task.processor = csv_processor();

    let html = Fixture::new().render(&[task]);
    let row = rows(&html)[0];

    assert_eq!(
        cell(row, "source"),
        "<strong>FTP</strong><br /><div>host: a.example</div><div>port: 21</div>\
         <div>username: etl</div><div>delete_loaded: false</div>"
    );
    assert_eq!(
        cell(row, "target"),
        format!(
            "<strong>SFTP</strong><br /><div>host: b.example</div><div>port: 22</div>\
             <div>username: loader</div><div>directory: {}</div>",
            esc("/incoming")
        )
    );
    assert_eq!(
        cell(row, "processor"),
        "<strong>CSV</strong><br /><div>delimiter: ,</div><div>skip_header: true</div><div>columns: </div>"
    );
    assert!(!html.contains("not-for-display"));
}

#[test]
fn item_without_settings_shows_name_only() {
    let html = Fixture::new().render(&[sample_task(1, true)]);

    assert_eq!(cell(rows(&html)[0], "processor"), "<strong>Passthrough</strong><br />");
}

#[test]
fn past_next_run_is_shown_as_now() {
    let task = with_next_run(sample_task(7, true), fixed_now() - Duration::hours(3));

    let html = Fixture::new().render(std::slice::from_ref(&task));

    assert_eq!(
        cell(rows(&html)[0], "schedule"),
        "Daily at 02:00<br />Friday, 16 October 2026, 12:00 PM"
    );
    assert_eq!(task.schedule.next_run, Some(fixed_now() - Duration::hours(3)));
}

#[test]
fn future_next_run_is_shown_unchanged() {
    let next = fixed_now() + Duration::hours(14);
    let html = Fixture::new().render(&[with_next_run(sample_task(7, true), next)]);

    assert_eq!(
        cell(rows(&html)[0], "schedule"),
        "Daily at 02:00<br />Saturday, 17 October 2026, 2:00 AM"
    );
}

#[test]
fn absent_next_run_shows_description_only() {
    let html = Fixture::new().render(&[sample_task(7, true)]);

    assert_eq!(cell(rows(&html)[0], "schedule"), "Daily at 02:00");
}

#[test]
fn action_links_keep_fixed_order() {
    let html = Fixture::new().render(&[sample_task(7, true), sample_task(8, false)]);

    for (row, (toggle, id)) in rows(&html).iter().zip([("t/hide", 7), ("t/show", 8)]) {
        let actions = cell(row, "actions");
        assert!(actions.starts_with("<nobr>") && actions.ends_with("</nobr>"));
        assert_eq!(actions.matches("<a href=").count(), 4);

        let positions: Vec<usize> = [
            esc(&format!("history.php?id={}", id)),
            esc(&format!("status.php?id={}", id)),
            esc(&format!("index.php?id={}", id)),
            esc(&format!("delete.php?id={}", id)),
        ]
        .iter()
        .map(|needle| actions.find(needle.as_str()).expect("link present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

        let icons: Vec<usize> = ["t/viewdetails", toggle, "t/edit", "t/delete"]
            .iter()
            .map(|name| actions.find(&icon(name)).expect("icon present"))
            .collect();
        assert!(icons.windows(2).all(|w| w[0] < w[1]), "{icons:?}");
    }
}

#[test]
fn toggle_follows_enabled_state() {
    let html = Fixture::new().render(&[sample_task(7, true), sample_task(8, false)]);
    let rendered = rows(&html);

    let enabled = cell(rendered[0], "actions");
    assert!(enabled.contains(&format!(
        r#"title="Disable"><img src="{}" alt="Disable" class="iconsmall" />"#,
        icon("t/hide")
    )));
    assert!(!enabled.contains("Enable"));

    let disabled = cell(rendered[1], "actions");
    assert!(disabled.contains(&format!(
        r#"title="Enable"><img src="{}" alt="Enable" class="iconsmall" />"#,
        icon("t/show")
    )));
    assert!(!disabled.contains("Disable"));
}

#[test]
fn action_titles_are_localized() {
    let html = Fixture::new().render(&[sample_task(7, true)]);
    let actions = cell(rows(&html)[0], "actions");

    for title in ["View history", "Disable", "Edit", "Delete"] {
        assert!(actions.contains(&format!(r#"title="{}""#, title)), "{title}");
        assert!(actions.contains(&format!(r#"alt="{}""#, title)), "{title}");
    }
}

#[test]
fn legacy_naming_keeps_taskid_on_history_link() {
    let html = Fixture::with_naming(ParamNaming::Legacy).render(&[sample_task(7, true)]);
    let actions = cell(rows(&html)[0], "actions");

    assert!(actions.contains(&esc(&format!("{}/admin/tool/etl/history.php?taskid=7", WWWROOT))));
    assert!(actions.contains(&esc(&format!("{}/admin/tool/etl/status.php?id=7", WWWROOT))));
}

#[test]
fn overridden_strings_are_used_everywhere() {
    let mut fixture = Fixture::new();
    fixture.strings.set("core", "yes", "Ja");
    fixture.strings.set("tasks", "source", "Quelle");

    let html = fixture.render(&[sample_task(7, true)]);

    assert!(html.contains(r#"scope="col">Quelle</th>"#));
    assert_eq!(cell(rows(&html)[0], "enabled"), "Ja");
}

// ---------- hand-rolled task records -------------------------------------

struct Item {
    name: &'static str,
    settings: Vec<(String, String)>,
}

impl Displayable for Item {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        Ok(self.settings.clone())
    }
}

struct Once {
    description: &'static str,
    next: Option<DateTime<Utc>>,
}

impl Scheduled for Once {
    fn formatted(&self) -> String {
        self.description.to_string()
    }

    fn next_run(&self) -> Option<DateTime<Utc>> {
        self.next
    }
}

struct Record {
    id: TaskId,
    source: Item,
    target: Item,
    processor: Item,
    schedule: Once,
}

impl Record {
    fn new(source: &'static str, description: &'static str) -> Self {
        let item = |name| Item {
            name,
            settings: vec![],
        };
        Self {
            id: 42,
            source: Item {
                name: source,
                settings: vec![("query".into(), "a < b && c".into())],
            },
            target: item("Archive"),
            processor: item("Identity"),
            schedule: Once {
                description,
                next: None,
            },
        }
    }
}

impl TaskRecord for Record {
    fn id(&self) -> TaskId {
        self.id
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn source(&self) -> &dyn Displayable {
        &self.source
    }

    fn target(&self) -> &dyn Displayable {
        &self.target
    }

    fn processor(&self) -> &dyn Displayable {
        &self.processor
    }

    fn schedule(&self) -> &dyn Scheduled {
        &self.schedule
    }
}

#[test]
fn text_content_is_escaped() {
    let html = Fixture::new().render(&[Record::new("<Custom & Co>", "Once")]);

    assert_eq!(
        cell(rows(&html)[0], "source"),
        "<strong>&lt;Custom &amp; Co&gt;</strong><br /><div>query: a &lt; b &amp;&amp; c</div>"
    );
}

#[test]
fn empty_item_name_fails_the_render() {
    let err = Fixture::new()
        .table()
        .render(&[Record::new("  ", "Once")])
        .unwrap_err();

    assert!(matches!(err, RenderError::MalformedTask { .. }));
    assert!(err.to_string().contains("[task 42]"));
    assert!(err.to_string().contains("'source'"));
}

#[test]
fn empty_schedule_description_fails_the_render() {
    let err = Fixture::new()
        .table()
        .render(&[Record::new("Custom", "")])
        .unwrap_err();

    assert!(err.to_string().contains("'schedule'"));
}

#[test]
fn one_bad_task_fails_the_whole_table() {
    let tasks = vec![Record::new("Good", "Once"), Record::new("", "Once")];

    assert!(Fixture::new().table().render(&tasks).is_err());
}

#[derive(Serialize)]
struct RoutedSource {
    host: String,
    routes: BTreeMap<(u8, u8), String>,
}

impl ToSerdeMap for RoutedSource {}

impl Displayable for RoutedSource {
    fn name(&self) -> String {
        "Routed".to_string()
    }

    fn settings_for_display(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        self.display_settings()
    }
}

struct RoutedRecord {
    source: RoutedSource,
    rest: Record,
}

impl TaskRecord for RoutedRecord {
    fn id(&self) -> TaskId {
        self.rest.id
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn source(&self) -> &dyn Displayable {
        &self.source
    }

    fn target(&self) -> &dyn Displayable {
        &self.rest.target
    }

    fn processor(&self) -> &dyn Displayable {
        &self.rest.processor
    }

    fn schedule(&self) -> &dyn Scheduled {
        &self.rest.schedule
    }
}

#[test]
fn unserializable_settings_fail_the_render() {
    let task = RoutedRecord {
        source: RoutedSource {
            host: "a.example".into(),
            routes: BTreeMap::from([((1, 2), "east".to_string())]),
        },
        rest: Record::new("unused", "Once"),
    };

    let err = Fixture::new().table().render(&[task]).unwrap_err();

    assert!(matches!(err, RenderError::InvalidSettings { .. }));
    assert!(err.to_string().contains("[task 42]"));
    assert!(err.to_string().contains("'source'"));
}

// ---------- collaborator failures ----------------------------------------

#[test]
fn missing_header_string_fails_construction() {
    let mut fixture = Fixture::new();
    fixture.strings = StringCatalog::empty();

    let err = TaskTable::new(TableId::explicit("x"), DEFAULT_TABLE_CLASS, fixture.deps())
        .err()
        .expect("construction should fail");
    assert!(matches!(err, RenderError::MissingString { .. }));
}

#[test]
fn missing_row_string_fails_render() {
    let mut fixture = Fixture::new();
    let mut strings = StringCatalog::empty();
    for key in ["source", "target", "processor", "schedule", "enabled"] {
        strings.set("tasks", key, key);
    }
    strings.set("core", "actions", "actions");
    fixture.strings = strings;

    let table = fixture.table();
    assert!(table.render::<EtlTask>(&[]).is_ok());
    let err = table.render(&[sample_task(1, true)]).unwrap_err();
    assert!(err.to_string().contains("'yes'"));
}

struct NoDeleteIcon;

impl IconResolver for NoDeleteIcon {
    fn icon_url(&self, icon: &str) -> Result<String, RenderError> {
        if icon == "t/delete" {
            Err(RenderError::unresolvable_icon(icon))
        } else {
            Ok(format!("/pix/{}.svg", icon))
        }
    }
}

#[test]
fn unresolvable_icon_fails_render() {
    let fixture = Fixture::new();
    let icons = NoDeleteIcon;
    let deps = Collaborators {
        icons: &icons,
        ..fixture.deps()
    };

    let table = TaskTable::new(TableId::explicit("x"), DEFAULT_TABLE_CLASS, deps).unwrap();
    let err = table.render(&[sample_task(1, true)]).unwrap_err();

    assert!(matches!(err, RenderError::UnresolvableIcon { .. }));
}
