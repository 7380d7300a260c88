//! Mail payload.

use crate::encode::{long_date, write_bool, write_opt, Encode, SyncItem};
use crate::EntityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tag_sink::{Result, TagSink};
use wbxml_types::tags::email;

/// Message class used when none is set.
pub const DEFAULT_MESSAGE_CLASS: &str = "IPM.Note";

/// Message importance as the protocol numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
}

impl Importance {
    pub fn code(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::High => 2,
        }
    }
}

/// A mail item as delivered to the device.
///
/// Address fields hold already formatted address lists
/// (`"Ann <ann@example.com>, bob@example.com"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailMessage {
    pub to: Option<String>,
    pub cc: Option<String>,
    pub from: Option<String>,
    pub reply_to: Option<String>,
    pub subject: Option<String>,
    pub thread_topic: Option<String>,
    pub received: Option<DateTime<Utc>>,
    pub display_to: Option<String>,
    pub importance: Option<Importance>,
    pub read: bool,
    pub body: Option<String>,
    pub body_truncated: bool,
    pub message_class: Option<String>,
}

impl MailMessage {
    pub fn message_class(&self) -> &str {
        self.message_class.as_deref().unwrap_or(DEFAULT_MESSAGE_CLASS)
    }
}

impl Encode for MailMessage {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        write_opt(sink, email::TO, self.to.as_deref())?;
        write_opt(sink, email::CC, self.cc.as_deref())?;
        write_opt(sink, email::FROM, self.from.as_deref())?;
        write_opt(sink, email::REPLY_TO, self.reply_to.as_deref())?;
        write_opt(sink, email::SUBJECT, self.subject.as_deref())?;
        write_opt(sink, email::THREAD_TOPIC, self.thread_topic.as_deref())?;
        if let Some(received) = &self.received {
            sink.element(email::DATE_RECEIVED, &long_date(received))?;
        }
        write_opt(sink, email::DISPLAY_TO, self.display_to.as_deref())?;
        if let Some(importance) = self.importance {
            sink.element(email::IMPORTANCE, &importance.code().to_string())?;
        }
        write_bool(sink, email::READ, self.read)?;
        if let Some(body) = &self.body {
            sink.element(email::BODY_SIZE, &body.len().to_string())?;
            write_bool(sink, email::BODY_TRUNCATED, self.body_truncated)?;
            sink.element(email::BODY, body)?;
        }
        sink.element(email::MESSAGE_CLASS, self.message_class())
    }
}

impl SyncItem for MailMessage {
    fn entity_type(&self) -> EntityType {
        EntityType::Mail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tag_sink::{RecordingSink, SinkEvent};

    fn rendered(mail: &MailMessage) -> String {
        let mut sink = RecordingSink::new();
        mail.encode(&mut sink).unwrap();
        assert!(sink.is_balanced());
        sink.render()
    }

    #[test]
    fn test_minimal_mail_writes_read_and_class() {
        let mut sink = RecordingSink::new();
        MailMessage::default().encode(&mut sink).unwrap();

        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Start(email::READ),
                SinkEvent::Content("0".to_string()),
                SinkEvent::End,
                SinkEvent::Start(email::MESSAGE_CLASS),
                SinkEvent::Content("IPM.Note".to_string()),
                SinkEvent::End,
            ]
        );
    }

    #[test]
    fn test_full_mail() {
        let mail = MailMessage {
            to: Some("ann@example.com".to_string()),
            from: Some("Bob <bob@example.com>".to_string()),
            subject: Some("Lunch".to_string()),
            received: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            importance: Some(Importance::High),
            read: true,
            body: Some("See you at noon".to_string()),
            ..Default::default()
        };

        let text = rendered(&mail);
        let expected = "\
<POOMMAIL:To>ann@example.com</POOMMAIL:To>
<POOMMAIL:From>Bob &lt;bob@example.com&gt;</POOMMAIL:From>
<POOMMAIL:Subject>Lunch</POOMMAIL:Subject>
<POOMMAIL:DateReceived>2024-03-01T12:00:00.000Z</POOMMAIL:DateReceived>
<POOMMAIL:Importance>2</POOMMAIL:Importance>
<POOMMAIL:Read>1</POOMMAIL:Read>
<POOMMAIL:BodySize>15</POOMMAIL:BodySize>
<POOMMAIL:BodyTruncated>0</POOMMAIL:BodyTruncated>
<POOMMAIL:Body>See you at noon</POOMMAIL:Body>
<POOMMAIL:MessageClass>IPM.Note</POOMMAIL:MessageClass>
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_message_class() {
        let mail = MailMessage {
            message_class: Some("IPM.Schedule.Meeting.Request".to_string()),
            ..Default::default()
        };
        assert!(rendered(&mail).contains(">IPM.Schedule.Meeting.Request<"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let mail: MailMessage =
            serde_json::from_str(r#"{"subject": "Hi", "importance": "low"}"#).unwrap();
        assert_eq!(mail.subject.as_deref(), Some("Hi"));
        assert_eq!(mail.importance, Some(Importance::Low));
        assert!(!mail.read);
        assert_eq!(mail.message_class(), DEFAULT_MESSAGE_CLASS);
    }
}
