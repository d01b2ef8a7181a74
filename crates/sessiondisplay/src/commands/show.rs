use sessiondisplay_store::Paths;
use uuid::Uuid;

use super::open_service;

/// Display info as JSON, or `None` when the session does not exist
pub fn render(
    paths: &Paths,
    session_id: Uuid,
    project_id: Uuid,
    pretty: bool,
) -> anyhow::Result<Option<String>> {
    let service = open_service(paths)?;
    let Some(info) = service.get_session_display_info(session_id, project_id)? else {
        return Ok(None);
    };

    let json = if pretty {
        serde_json::to_string_pretty(&info)?
    } else {
        serde_json::to_string(&info)?
    };
    Ok(Some(json))
}

pub fn run(
    paths: &Paths,
    session_id: Uuid,
    project_id: Uuid,
    pretty: bool,
) -> anyhow::Result<()> {
    match render(paths, session_id, project_id, pretty)? {
        Some(json) => println!("{json}"),
        None => println!("Session {session_id} not found"),
    }
    Ok(())
}
