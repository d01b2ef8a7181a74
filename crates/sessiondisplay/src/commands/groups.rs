use sessiondisplay_core::SessionEntryGroup;
use sessiondisplay_records::PromptModel;
use sessiondisplay_store::Paths;
use uuid::Uuid;

use super::open_service;

fn describe(index: usize, group: &SessionEntryGroup) -> String {
    let display = group.display();
    let messages = display
        .content
        .as_ref()
        .and_then(PromptModel::messages)
        .map_or(0, <[_]>::len);

    format!(
        "{}. {} {} messages={} evaluations={}",
        index + 1,
        group.kind(),
        display.prompt_name,
        messages,
        display.evaluations.len()
    )
}

/// One line per display group, or `None` when the session does not exist
pub fn render(
    paths: &Paths,
    session_id: Uuid,
    project_id: Uuid,
) -> anyhow::Result<Option<Vec<String>>> {
    let service = open_service(paths)?;
    let Some(info) = service.get_session_display_info(session_id, project_id)? else {
        return Ok(None);
    };

    Ok(Some(
        info.session_groups
            .iter()
            .enumerate()
            .map(|(index, group)| describe(index, group))
            .collect(),
    ))
}

pub fn run(paths: &Paths, session_id: Uuid, project_id: Uuid) -> anyhow::Result<()> {
    match render(paths, session_id, project_id)? {
        Some(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        None => println!("Session {session_id} not found"),
    }
    Ok(())
}
