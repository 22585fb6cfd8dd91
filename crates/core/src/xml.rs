// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task XML: serialization of definitions and exec-path extraction
//!
//! Element names follow the Task Scheduler schema
//! (`http://schemas.microsoft.com/windows/2004/02/mit/task`).

use crate::definition::{TaskDefinition, Trigger};
use crate::trigger::Cadence;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::Writer;
use thiserror::Error;

/// Namespace of every element in a task definition
pub const TASK_NAMESPACE: &str = "http://schemas.microsoft.com/windows/2004/02/mit/task";

/// Schema version written on the root element
const TASK_SCHEMA_VERSION: &str = "1.2";

/// `Actions -> Exec -> Command` below the document root
const EXEC_COMMAND_PATH: [&[u8]; 3] = [b"Actions", b"Exec", b"Command"];

/// Errors reading or writing task XML
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("malformed task xml: {0}")]
    Malformed(#[from] quick_xml::Error),
    #[error("failed to write task xml: {0}")]
    Write(#[from] std::io::Error),
    #[error("task xml is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("task xml has no root element")]
    NoRoot,
}

/// Command path of the exec action in a task's XML
///
/// Walks the namespaced `Actions/Exec/Command` elements under the root and
/// keeps the last `Command` text seen, so with several exec actions the last
/// one wins. A definition without exec actions yields an empty string; a
/// document without a root element is an error.
pub fn extract_exec_path(xml: &str) -> Result<String, XmlError> {
    let mut reader = NsReader::from_str(xml);

    // One flag per open element: is it on the Actions/Exec/Command path?
    let mut open: Vec<bool> = Vec::new();
    let mut command: Option<String> = None;
    let mut exec_path = String::new();
    let mut seen_root = false;

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(e) => {
                seen_root = true;
                let on_path = continues_exec_path(&open, &ns, e.local_name().as_ref());
                if on_path && open.len() == EXEC_COMMAND_PATH.len() {
                    command = Some(String::new());
                }
                open.push(on_path);
            }
            Event::Empty(e) => {
                seen_root = true;
                let on_path = continues_exec_path(&open, &ns, e.local_name().as_ref());
                if on_path && open.len() == EXEC_COMMAND_PATH.len() {
                    exec_path.clear();
                }
            }
            Event::Text(t) => {
                if let Some(buf) = command.as_mut() {
                    buf.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if let Some(buf) = command.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                let was_on_path = open.pop().unwrap_or(false);
                if was_on_path && open.len() == EXEC_COMMAND_PATH.len() {
                    if let Some(text) = command.take() {
                        exec_path = text;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(XmlError::NoRoot);
    }
    Ok(exec_path)
}

/// Whether an element opened at the current depth stays on the command path
fn continues_exec_path(open: &[bool], ns: &ResolveResult, local_name: &[u8]) -> bool {
    let depth = open.len();
    if depth == 0 {
        // document root, whatever its name
        return true;
    }
    if depth > EXEC_COMMAND_PATH.len() || !open[depth - 1] {
        return false;
    }
    let in_task_ns =
        matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == TASK_NAMESPACE.as_bytes());
    in_task_ns && local_name == EXEC_COMMAND_PATH[depth - 1]
}

impl TaskDefinition {
    /// Serialize the definition as Task Scheduler XML
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-16"), None)))?;
        let mut root = BytesStart::new("Task");
        root.push_attribute(("version", TASK_SCHEMA_VERSION));
        root.push_attribute(("xmlns", TASK_NAMESPACE));
        w.write_event(Event::Start(root))?;

        let info = &self.registration_info;
        start(&mut w, "RegistrationInfo")?;
        if let Some(date) = &info.date {
            text_element(&mut w, "Date", date)?;
        }
        if !info.author.is_empty() {
            text_element(&mut w, "Author", &info.author)?;
        }
        if !info.description.is_empty() {
            text_element(&mut w, "Description", &info.description)?;
        }
        if !info.source.is_empty() {
            text_element(&mut w, "Source", &info.source)?;
        }
        end(&mut w, "RegistrationInfo")?;

        start(&mut w, "Triggers")?;
        for trigger in &self.triggers {
            write_trigger(&mut w, trigger)?;
        }
        end(&mut w, "Triggers")?;

        let settings = &self.settings;
        start(&mut w, "Settings")?;
        text_element(
            &mut w,
            "MultipleInstancesPolicy",
            settings.multiple_instances.xml_name(),
        )?;
        text_element(&mut w, "AllowStartOnDemand", bool_text(settings.allow_demand_start))?;
        text_element(&mut w, "StartWhenAvailable", bool_text(settings.start_when_available))?;
        text_element(&mut w, "Enabled", bool_text(settings.enabled))?;
        text_element(&mut w, "Hidden", bool_text(settings.hidden))?;
        text_element(&mut w, "ExecutionTimeLimit", &settings.execution_time_limit)?;
        if !settings.restart_interval.is_empty() {
            start(&mut w, "RestartOnFailure")?;
            text_element(&mut w, "Interval", &settings.restart_interval)?;
            text_element(&mut w, "Count", &settings.restart_count.to_string())?;
            end(&mut w, "RestartOnFailure")?;
        }
        end(&mut w, "Settings")?;

        let mut actions = BytesStart::new("Actions");
        actions.push_attribute(("Context", "Author"));
        w.write_event(Event::Start(actions))?;
        for exec in &self.actions {
            start(&mut w, "Exec")?;
            text_element(&mut w, "Command", &exec.path)?;
            if !exec.arguments.is_empty() {
                text_element(&mut w, "Arguments", &exec.arguments)?;
            }
            if !exec.working_directory.is_empty() {
                text_element(&mut w, "WorkingDirectory", &exec.working_directory)?;
            }
            end(&mut w, "Exec")?;
        }
        end(&mut w, "Actions")?;

        end(&mut w, "Task")?;
        Ok(String::from_utf8(w.into_inner())?)
    }
}

fn write_trigger(w: &mut Writer<Vec<u8>>, trigger: &Trigger) -> Result<(), XmlError> {
    let element = match trigger.cadence {
        Cadence::OneTime => "TimeTrigger",
        _ => "CalendarTrigger",
    };
    start(w, element)?;
    text_element(w, "StartBoundary", &trigger.start_boundary)?;
    text_element(w, "Enabled", "true")?;

    match &trigger.cadence {
        Cadence::Daily { days_interval } => {
            start(w, "ScheduleByDay")?;
            text_element(w, "DaysInterval", &days_interval.to_string())?;
            end(w, "ScheduleByDay")?;
        }
        Cadence::Weekly {
            weeks_interval,
            days_of_week,
        } => {
            start(w, "ScheduleByWeek")?;
            text_element(w, "WeeksInterval", &weeks_interval.to_string())?;
            empty_list(w, "DaysOfWeek", &days_of_week.labels())?;
            end(w, "ScheduleByWeek")?;
        }
        Cadence::Monthly {
            days_of_month,
            months_of_year,
        } => {
            start(w, "ScheduleByMonth")?;
            start(w, "DaysOfMonth")?;
            for day in days_of_month.labels() {
                text_element(w, "Day", &day)?;
            }
            end(w, "DaysOfMonth")?;
            empty_list(w, "Months", &months_of_year.labels())?;
            end(w, "ScheduleByMonth")?;
        }
        Cadence::MonthlyDayOfWeek {
            days_of_week,
            months_of_year,
            weeks_of_month,
        } => {
            start(w, "ScheduleByMonthDayOfWeek")?;
            start(w, "Weeks")?;
            for week in weeks_of_month.labels() {
                text_element(w, "Week", week)?;
            }
            end(w, "Weeks")?;
            empty_list(w, "DaysOfWeek", &days_of_week.labels())?;
            empty_list(w, "Months", &months_of_year.labels())?;
            end(w, "ScheduleByMonthDayOfWeek")?;
        }
        Cadence::OneTime => {}
    }

    end(w, element)
}

fn start(w: &mut Writer<Vec<u8>>, name: &str) -> Result<(), XmlError> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end(w: &mut Writer<Vec<u8>>, name: &str) -> Result<(), XmlError> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), XmlError> {
    start(w, name)?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    end(w, name)
}

/// `<DaysOfWeek><Monday /><Friday /></DaysOfWeek>` style lists
fn empty_list(w: &mut Writer<Vec<u8>>, name: &str, items: &[&str]) -> Result<(), XmlError> {
    start(w, name)?;
    for item in items {
        w.write_event(Event::Empty(BytesStart::new(*item)))?;
    }
    end(w, name)
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
