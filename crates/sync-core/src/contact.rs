//! Contact payload.

use crate::encode::{long_date, write_opt, Encode, SyncItem};
use crate::EntityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tag_sink::{Result, TagSink};
use wbxml_types::tags::contacts;

/// The protocol carries at most three addresses per contact.
pub const MAX_EMAIL_ADDRESSES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub file_as: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub email_addresses: Vec<String>,
    pub business_phone: Option<String>,
    pub home_phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub birthday: Option<DateTime<Utc>>,
}

impl Encode for Contact {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        if let Some(birthday) = &self.birthday {
            sink.element(contacts::BIRTHDAY, &long_date(birthday))?;
        }
        write_opt(sink, contacts::BUSINESS_PHONE_NUMBER, self.business_phone.as_deref())?;
        write_opt(sink, contacts::COMPANY_NAME, self.company_name.as_deref())?;

        if self.email_addresses.len() > MAX_EMAIL_ADDRESSES {
            tracing::debug!(
                "Contact has {} email addresses, only the first {MAX_EMAIL_ADDRESSES} are sent",
                self.email_addresses.len()
            );
        }
        let address_tags = [
            contacts::EMAIL1_ADDRESS,
            contacts::EMAIL2_ADDRESS,
            contacts::EMAIL3_ADDRESS,
        ];
        for (tag, address) in address_tags.into_iter().zip(&self.email_addresses) {
            sink.element(tag, address)?;
        }

        write_opt(sink, contacts::FILE_AS, self.file_as.as_deref())?;
        write_opt(sink, contacts::FIRST_NAME, self.first_name.as_deref())?;
        write_opt(sink, contacts::HOME_PHONE_NUMBER, self.home_phone.as_deref())?;
        write_opt(sink, contacts::JOB_TITLE, self.job_title.as_deref())?;
        write_opt(sink, contacts::LAST_NAME, self.last_name.as_deref())?;
        write_opt(sink, contacts::MIDDLE_NAME, self.middle_name.as_deref())?;
        write_opt(sink, contacts::MOBILE_PHONE_NUMBER, self.mobile_phone.as_deref())
    }
}

impl SyncItem for Contact {
    fn entity_type(&self) -> EntityType {
        EntityType::Contact
    }
}
