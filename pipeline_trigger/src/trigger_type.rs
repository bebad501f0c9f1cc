use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The trigger kinds the matching engine knows about. `Trigger::trigger_type`
/// itself stays a plain string so unknown kinds pass through untouched.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Cron,
    Git,
    Jenkins,
    Docker,
    Webhook,
    Pubsub,
    Dryrun,
}

impl TriggerType {
    // Convert a TriggerType to its wire string
    pub fn as_str(&self) -> &'static str {
        match *self {
            TriggerType::Cron => "cron",
            TriggerType::Git => "git",
            TriggerType::Jenkins => "jenkins",
            TriggerType::Docker => "docker",
            TriggerType::Webhook => "webhook",
            TriggerType::Pubsub => "pubsub",
            TriggerType::Dryrun => "dryrun",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cron" => Ok(TriggerType::Cron),
            "git" => Ok(TriggerType::Git),
            "jenkins" => Ok(TriggerType::Jenkins),
            "docker" => Ok(TriggerType::Docker),
            "webhook" => Ok(TriggerType::Webhook),
            "pubsub" => Ok(TriggerType::Pubsub),
            "dryrun" => Ok(TriggerType::Dryrun),
            _ => Err(()),
        }
    }
}
