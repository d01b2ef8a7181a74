use sessiondisplay_core::{SessionsRepository, TestListInfoWithSelection};
use sessiondisplay_store::{JsonlStore, Paths};
use uuid::Uuid;

use super::open_service;

fn describe(test_list: &TestListInfoWithSelection) -> String {
    let mark = if test_list.selected { "x" } else { " " };
    format!("[{mark}] {} ({})", test_list.info.name, test_list.info.id)
}

/// Compatible test lists, or `None` when the session does not exist
pub fn render(
    paths: &Paths,
    session_id: Uuid,
    project_id: Uuid,
) -> anyhow::Result<Option<Vec<String>>> {
    let Some(session) = JsonlStore::new(paths.clone()).try_find(session_id)? else {
        return Ok(None);
    };

    let service = open_service(paths)?;
    let test_lists = service.find_compatible_test_lists_for_session(&session, project_id)?;
    Ok(Some(test_lists.iter().map(describe).collect()))
}

pub fn run(paths: &Paths, session_id: Uuid, project_id: Uuid) -> anyhow::Result<()> {
    match render(paths, session_id, project_id)? {
        Some(lines) if lines.is_empty() => println!("No compatible test lists"),
        Some(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        None => println!("Session {session_id} not found"),
    }
    Ok(())
}
