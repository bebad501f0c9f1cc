use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod trigger_type;

/// Immutable description of the condition that starts a pipeline execution.
///
/// Every field is optional; a trigger definition supplies whatever subset its
/// kind needs and the matching engine interprets the rest. The `at_*` helpers
/// derive a new trigger from an incoming event, clearing whichever version
/// selectors the new value supersedes. The original is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trigger {
    pub enabled: bool,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub trigger_type: Option<String>,
    pub master: Option<String>,
    pub job: Option<String>,
    pub build_number: Option<u64>,
    pub property_file: Option<String>,
    pub cron_expression: Option<String>,
    pub source: Option<String>,
    pub project: Option<String>,
    pub slug: Option<String>,
    pub hash: Option<String>,
    pub parameters: Option<Map<String, Value>>,
    pub account: Option<String>,
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub digest: Option<String>,
    pub payload_constraints: Option<Map<String, Value>>,
    pub payload: Option<Map<String, Value>>,
    pub attribute_constraints: Option<Map<String, Value>>,
    pub branch: Option<String>,
    pub run_as_user: Option<String>,
    pub secret: Option<String>,

    /// Logical name given to the subscription by the user, not the locator
    /// the pub/sub system uses.
    pub subscription_name: Option<String>,
    pub pubsub_system: Option<String>,
    pub expected_artifact_ids: Option<Vec<String>>,
    pub last_successful_execution: Option<Map<String, Value>>,
}

impl Trigger {
    /// Pin the trigger to a CI build number, dropping the git selectors it
    /// supersedes. `branch` is intentionally left alone.
    pub fn at_build_number(&self, build_number: u64) -> Trigger {
        Trigger {
            build_number: Some(build_number),
            hash: None,
            tag: None,
            ..self.clone()
        }
    }

    pub fn at_hash(&self, hash: &str) -> Trigger {
        Trigger {
            build_number: None,
            hash: Some(hash.to_string()),
            tag: None,
            ..self.clone()
        }
    }

    pub fn at_branch(&self, branch: &str) -> Trigger {
        Trigger {
            build_number: None,
            tag: None,
            branch: Some(branch.to_string()),
            ..self.clone()
        }
    }

    pub fn at_tag(&self, tag: &str) -> Trigger {
        Trigger {
            build_number: None,
            hash: None,
            tag: Some(tag.to_string()),
            ..self.clone()
        }
    }

    pub fn at_payload(&self, payload: Map<String, Value>) -> Trigger {
        Trigger {
            payload: Some(payload),
            ..self.clone()
        }
    }

    pub fn at_parameters(&self, parameters: Map<String, Value>) -> Trigger {
        Trigger {
            parameters: Some(parameters),
            ..self.clone()
        }
    }

    pub fn at_secret(&self, secret: &str) -> Trigger {
        Trigger {
            build_number: None,
            hash: None,
            digest: None,
            secret: Some(secret.to_string()),
            ..self.clone()
        }
    }

    pub fn at_message_description(&self, subscription_name: &str, pubsub_system: &str) -> Trigger {
        Trigger {
            subscription_name: Some(subscription_name.to_string()),
            pubsub_system: Some(pubsub_system.to_string()),
            ..self.clone()
        }
    }

    /// Build a trigger from the mapping form a definition loader hands over.
    /// Absent keys stay unset; unknown `type` strings pass through as-is.
    pub fn from_value(value: Value) -> Result<Trigger> {
        serde_json::from_value(value).context("malformed trigger mapping")
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).context("trigger not representable as json")
    }
}

fn fmt_opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("null")
}

fn fmt_map(v: &Option<Map<String, Value>>) -> String {
    match v {
        Some(m) => Value::Object(m.clone()).to_string(),
        None => "null".to_string(),
    }
}

fn fmt_list(v: &Option<Vec<String>>) -> String {
    match v {
        Some(l) => format!("[{}]", l.join(", ")),
        None => "null".to_string(),
    }
}

// Values only, fixed order. Log rendering, not an equality surface.
impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trigger({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
            fmt_opt(&self.trigger_type),
            fmt_opt(&self.master),
            fmt_opt(&self.job),
            fmt_opt(&self.cron_expression),
            fmt_opt(&self.source),
            fmt_opt(&self.project),
            fmt_opt(&self.slug),
            fmt_opt(&self.account),
            fmt_opt(&self.repository),
            fmt_opt(&self.tag),
            fmt_map(&self.parameters),
            fmt_map(&self.payload_constraints),
            fmt_map(&self.attribute_constraints),
            fmt_opt(&self.branch),
            fmt_opt(&self.run_as_user),
            fmt_opt(&self.subscription_name),
            fmt_opt(&self.pubsub_system),
            fmt_list(&self.expected_artifact_ids),
            fmt_map(&self.payload),
        )
    }
}
