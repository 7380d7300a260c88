//! Closed set of message-level payloads.

use crate::encode::{Encode, SyncItem};
use crate::{Appointment, Contact, EntityType, MailMessage};
use serde::{Deserialize, Serialize};
use tag_sink::{Result, TagSink};

/// A message-level payload of any supported class.
///
/// In event files the class is given by a `type` field next to the
/// payload's own fields:
///
/// ```json
/// {"type": "email", "subject": "Hello", "read": true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Payload {
    #[serde(rename = "email", alias = "mail")]
    Mail(MailMessage),
    #[serde(rename = "calendar")]
    Calendar(Appointment),
    #[serde(rename = "contacts", alias = "contact")]
    Contact(Contact),
}

impl Encode for Payload {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        match self {
            Self::Mail(mail) => mail.encode(sink),
            Self::Calendar(appointment) => appointment.encode(sink),
            Self::Contact(contact) => contact.encode(sink),
        }
    }
}

impl SyncItem for Payload {
    fn entity_type(&self) -> EntityType {
        match self {
            Self::Mail(mail) => mail.entity_type(),
            Self::Calendar(appointment) => appointment.entity_type(),
            Self::Contact(contact) => contact.entity_type(),
        }
    }
}

impl From<MailMessage> for Payload {
    fn from(mail: MailMessage) -> Self {
        Self::Mail(mail)
    }
}

impl From<Appointment> for Payload {
    fn from(appointment: Appointment) -> Self {
        Self::Calendar(appointment)
    }
}

impl From<Contact> for Payload {
    fn from(contact: Contact) -> Self {
        Self::Contact(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_follows_variant() {
        assert_eq!(Payload::from(MailMessage::default()).entity_type(), EntityType::Mail);
        assert_eq!(
            Payload::from(Appointment::default()).entity_type(),
            EntityType::Calendar
        );
        assert_eq!(Payload::from(Contact::default()).entity_type(), EntityType::Contact);
    }

    #[test]
    fn test_deserialize_tagged() {
        let payload: Payload =
            serde_json::from_str(r#"{"type": "email", "subject": "Hello", "read": true}"#)
                .unwrap();
        match payload {
            Payload::Mail(mail) => {
                assert_eq!(mail.subject.as_deref(), Some("Hello"));
                assert!(mail.read);
            }
            other => panic!("expected mail payload, got {other:?}"),
        }

        let payload: Payload =
            serde_json::from_str(r#"{"type": "contact", "first_name": "Jane"}"#).unwrap();
        assert_eq!(payload.entity_type(), EntityType::Contact);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<Payload>(r#"{"type": "tasks"}"#);
        assert!(result.is_err());
    }
}
