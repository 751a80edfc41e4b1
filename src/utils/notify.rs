//! Outbound message relay for the lead-capture forms.
//!
//! Submissions are formatted into a Markdown message and posted to the
//! configured messaging-bot endpoint. The page only ever sees a
//! `Result`: success, or an error to render as a status banner.

use std::fmt;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyError {
    /// Relay token/chat id not provided at build time.
    Unconfigured,
    /// The request could not be built or sent.
    Request(String),
    /// The endpoint answered but refused the message.
    Rejected(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Unconfigured => write!(f, "relay is not configured"),
            NotifyError::Request(e) => write!(f, "relay request failed: {}", e),
            NotifyError::Rejected(e) => write!(f, "relay rejected the message: {}", e),
        }
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Deserialize)]
struct RelayAck {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Send one message to the relay endpoint.
pub async fn notify(message: &str) -> Result<(), NotifyError> {
    let url = config::get_relay_url().ok_or(NotifyError::Unconfigured)?;
    let chat_id = config::get_relay_chat_id().ok_or(NotifyError::Unconfigured)?;

    let response = Request::post(&url)
        .json(&RelayPayload {
            chat_id,
            text: message,
            parse_mode: "Markdown",
        })
        .map_err(|e| NotifyError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| NotifyError::Request(e.to_string()))?;

    if !response.ok() {
        log::warn!("relay returned status {}", response.status());
        return Err(NotifyError::Rejected(format!(
            "status {}",
            response.status()
        )));
    }

    match response.json::<RelayAck>().await {
        Ok(ack) if ack.ok => {
            gloo_console::log!("relay message delivered");
            Ok(())
        }
        Ok(ack) => Err(NotifyError::Rejected(
            ack.description.unwrap_or_else(|| "unknown error".to_string()),
        )),
        Err(e) => Err(NotifyError::Request(e.to_string())),
    }
}

/// Contact-form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadRequest {
    pub name: String,
    pub phone: String,
    pub project: String,
}

pub fn lead_message(lead: &LeadRequest) -> String {
    format!(
        "\u{1F3AC} *New inquiry from the Firebird Films site*\n\n\
         \u{1F464} *Name:* {}\n\
         \u{1F4F1} *Phone:* {}\n\n\
         \u{1F4DD} *About the project:*\n{}",
        lead.name, lead.phone, lead.project
    )
}

/// Background-plates shoot brief, collected by the modal form.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatesBrief {
    pub contact_name: String,
    pub contact_info: String,
    pub company: String,
    pub project: String,
    pub location: String,
    pub season: String,
    pub weather: String,
    pub time_of_day: String,
    pub cars_count: String,
    pub car_height: String,
    pub camera_angle: String,
    pub speed: String,
    pub duration: String,
    pub license_type: String,
    pub supervising: String,
    pub stitching: String,
    pub notes: String,
}

impl Default for PlatesBrief {
    fn default() -> Self {
        Self {
            contact_name: String::new(),
            contact_info: String::new(),
            company: String::new(),
            project: String::new(),
            location: "Major city".to_string(),
            season: "Spring".to_string(),
            weather: "Sunny".to_string(),
            time_of_day: "Day".to_string(),
            cars_count: "no cars".to_string(),
            car_height: "sedan".to_string(),
            camera_angle: "horizon".to_string(),
            speed: String::new(),
            duration: String::new(),
            license_type: "Non-exclusive".to_string(),
            supervising: "yes".to_string(),
            stitching: "yes".to_string(),
            notes: String::new(),
        }
    }
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        "not specified"
    } else {
        value
    }
}

pub fn brief_message(brief: &PlatesBrief) -> String {
    format!(
        "\u{1F3AC} *BACKGROUND PLATES SHOOT BRIEF*\n\n\
         ```\n\
         Field | Value\n\
         ------|------\n\
         Name | {}\n\
         Contact | {}\n\
         Company | {}\n\
         Project | {}\n\
         Location | {}\n\
         Season | {}\n\
         Weather | {}\n\
         Time of day | {}\n\
         Cars in frame | {}\n\
         Camera car height | {}\n\
         Camera angle | {}\n\
         Speed | {} km/h\n\
         Total runtime | {}\n\
         License | {}\n\
         Supervision | {}\n\
         Stitching | {}\n\
         ```\n\n\
         \u{1F4DD} *Notes:*\n{}",
        brief.contact_name,
        brief.contact_info,
        or_unspecified(&brief.company),
        or_unspecified(&brief.project),
        brief.location,
        brief.season,
        brief.weather,
        brief.time_of_day,
        brief.cars_count,
        brief.car_height,
        brief.camera_angle,
        or_unspecified(&brief.speed),
        or_unspecified(&brief.duration),
        brief.license_type,
        brief.supervising,
        brief.stitching,
        if brief.notes.trim().is_empty() {
            "none"
        } else {
            &brief.notes
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_payload_serializes_to_the_bot_wire_shape() {
        let payload = RelayPayload {
            chat_id: "1234",
            text: "hello",
            parse_mode: "Markdown",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chat_id"], "1234");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["parse_mode"], "Markdown");
    }

    #[test]
    fn lead_message_carries_every_field() {
        let message = lead_message(&LeadRequest {
            name: "Ivan Petrov".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            project: "A launch film for our product".to_string(),
        });
        assert!(message.contains("Ivan Petrov"));
        assert!(message.contains("+7 (999) 123-45-67"));
        assert!(message.contains("A launch film for our product"));
    }

    #[test]
    fn brief_message_fills_in_unspecified_fields() {
        let message = brief_message(&PlatesBrief::default());
        assert!(message.contains("Company | not specified"));
        assert!(message.contains("Speed | not specified km/h"));
        assert!(message.contains("Location | Major city"));
        assert!(message.ends_with("none"));
    }

    #[test]
    fn brief_message_keeps_provided_values() {
        let brief = PlatesBrief {
            company: "Nova Pictures".to_string(),
            speed: "60".to_string(),
            notes: "Night highway, wet asphalt".to_string(),
            ..PlatesBrief::default()
        };
        let message = brief_message(&brief);
        assert!(message.contains("Company | Nova Pictures"));
        assert!(message.contains("Speed | 60 km/h"));
        assert!(message.contains("Night highway, wet asphalt"));
    }
}
