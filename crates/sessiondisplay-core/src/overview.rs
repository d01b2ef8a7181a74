//! Session-level overview rows

use crate::config::DisplayConfig;
use crate::group::{parameter_value, template_version_url};
use crate::types::DisplayMetadataInfo;
use sessiondisplay_records::{calculate_costs, format_decimal_dollars, format_thousands, Session};
use uuid::Uuid;

/// Aggregate cost, latency and token rows for a whole session
pub fn multi_session_overview(
    session: &Session,
    config: &DisplayConfig,
) -> Vec<DisplayMetadataInfo> {
    let mut metadata = Vec::new();

    let session_cost = calculate_costs(
        session.aggregate_prompt_token_cost,
        session.aggregate_return_token_cost,
    );
    if let Some(cost) = session_cost.filter(|c| !c.is_zero()) {
        metadata.push(DisplayMetadataInfo::new(
            "Total Session Cost",
            format_decimal_dollars(cost),
        ));
    }

    if let Some(latency) = session.aggregate_session_latency.filter(|l| !l.is_zero()) {
        let precision = config.overview_latency_precision;
        metadata.push(DisplayMetadataInfo::new(
            "Total Session Latency",
            format!("{:.*}s", precision as usize, latency.round_dp(precision)),
        ));
    }

    let counts = (
        session.aggregate_prompt_token_count.filter(|n| *n > 0),
        session.aggregate_return_token_count.filter(|n| *n > 0),
    );
    if let (Some(prompt_tokens), Some(return_tokens)) = counts {
        metadata.push(DisplayMetadataInfo::new(
            "Total Tokens",
            format_thousands(prompt_tokens.saturating_add(return_tokens)),
        ));
    }

    metadata
}

/// Aggregate rows followed by the first entry's prompt details.
///
/// Used when the whole session folded into a single group, so that entry
/// speaks for the session.
pub fn single_group_overview(
    session: &Session,
    project_id: Uuid,
    config: &DisplayConfig,
) -> Vec<DisplayMetadataInfo> {
    let mut metadata = multi_session_overview(session, config);
    let Some(first) = session.entries.first() else {
        return metadata;
    };

    metadata.push(
        DisplayMetadataInfo::new("Version", &first.template_name)
            .with_link(template_version_url(project_id, first)),
    );

    if let (Some(provider), Some(model)) = (&first.llm_provider, &first.llm_model) {
        metadata.push(DisplayMetadataInfo::new(
            "Provider",
            format!("{provider} ({model})"),
        ));
    }

    for (param, value) in &first.llm_parameters {
        if *param != config.functions_parameter {
            metadata.push(DisplayMetadataInfo::new(param, parameter_value(value)));
        }
    }

    if let Some(api_key_name) = &first.api_key_name {
        metadata.push(DisplayMetadataInfo::new("API Key", api_key_name));
    }

    if let Some(environment_name) = &first.environment_name {
        metadata.push(
            DisplayMetadataInfo::new("Environment", environment_name)
                .with_env_deleted(first.is_env_deleted),
        );
    }

    metadata
}
