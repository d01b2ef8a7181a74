//! Building a display group from one session entry

use crate::config::DisplayConfig;
use crate::types::{
    display_evaluations, DisplayMetadataInfo, DisplayableSessionGroup, GroupKind,
    SessionEntryGroup,
};
use serde_json::Value;
use sessiondisplay_records::{
    calculate_costs, format_decimal_dollars, format_latency, format_thousands, EvaluationPair,
    PromptModel, SessionEntry,
};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Link to the template version an entry was rendered from
pub(crate) fn template_version_url(project_id: Uuid, entry: &SessionEntry) -> String {
    format!(
        "/projects/{}/templates/{}/versions/{}",
        project_id, entry.prompt_template_id, entry.prompt_template_version_id
    )
}

pub(crate) fn parameter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Metadata rows for an entry, plus its function specification if it had one
fn entry_metadata(
    entry: &SessionEntry,
    project_id: Uuid,
    config: &DisplayConfig,
) -> (Vec<DisplayMetadataInfo>, Option<String>) {
    let mut metadata = Vec::new();

    if let (Some(provider), Some(model)) = (&entry.llm_provider, &entry.llm_model) {
        metadata.push(DisplayMetadataInfo::new(
            "Provider",
            format!("{provider} ({model})"),
        ));
    }

    let mut function_specification = None;
    for (param, value) in &entry.llm_parameters {
        if *param == config.functions_parameter {
            function_specification = Some(parameter_value(value));
        } else {
            metadata.push(DisplayMetadataInfo::new(param, parameter_value(value)));
        }
    }

    if let Some(api_key_name) = &entry.api_key_name {
        metadata.push(DisplayMetadataInfo::new("API Key", api_key_name));
    }

    let counts = (
        entry.prompt_token_count.filter(|n| *n > 0),
        entry.return_token_count.filter(|n| *n > 0),
    );
    if let (Some(prompt_tokens), Some(return_tokens)) = counts {
        metadata.push(DisplayMetadataInfo::new(
            "Tokens",
            format_thousands(prompt_tokens.saturating_add(return_tokens)),
        ));
    }

    metadata.push(
        DisplayMetadataInfo::new("Version", &entry.template_name)
            .with_link(template_version_url(project_id, entry)),
    );

    if let Some(environment_name) = &entry.environment_name {
        metadata.push(
            DisplayMetadataInfo::new("Environment", environment_name)
                .with_env_deleted(entry.is_env_deleted),
        );
    }

    (metadata, function_specification)
}

impl SessionEntryGroup {
    /// Build a group of the given kind for one entry.
    ///
    /// `override_content` replaces the entry's interpolated prompt, which the
    /// chat path uses to show the response as the final turn.
    pub fn from_entry(
        entry: &SessionEntry,
        kind: GroupKind,
        evaluations: &[EvaluationPair],
        project_id: Uuid,
        override_content: Option<PromptModel>,
        config: &DisplayConfig,
    ) -> Self {
        let echoed_inputs: BTreeMap<String, String> = entry
            .inputs
            .iter()
            .map(|(key, value)| (key.clone(), format!("{{{{{key}: {value}}}}}")))
            .collect();

        let (prompt_metadata, function_specification) =
            entry_metadata(entry, project_id, config);

        let cost = calculate_costs(entry.prompt_token_cost, entry.return_token_cost)
            .filter(|c| !c.is_zero())
            .map(format_decimal_dollars);
        let session_latency = entry
            .session_latency
            .filter(|l| !l.is_zero())
            .map(format_latency);

        SessionEntryGroup::new(
            kind,
            DisplayableSessionGroup {
                prompt_name: entry.template_name.clone(),
                prompt_metadata,
                prompt_template_content: entry.template_content.format(&echoed_inputs),
                cost,
                content: override_content.or_else(|| entry.interpolated_prompt_content.clone()),
                response: entry.response.clone(),
                session_latency,
                evaluations: display_evaluations(evaluations),
                function_call_response: entry.function_call_response.clone(),
                function_specification,
            },
        )
    }
}
