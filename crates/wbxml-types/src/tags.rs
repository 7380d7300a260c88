//! Named tag constants, one module per code page.
//!
//! Constant names follow the push layer's vocabulary (`MODIFY`, `REMOVE`,
//! `SERVER_ENTRY_ID`, `DATA`); the carried `name` is the element name as the
//! protocol spells it (`Change`, `Delete`, `ServerId`, `ApplicationData`).

macro_rules! code_page {
    ($page:ident { $($name:ident = $token:literal => $wire:literal,)* }) => {
        $(
            pub const $name: $crate::Tag =
                $crate::Tag::new($crate::CodePage::$page, $token, $wire);
        )*

        /// Every tag defined on this page.
        pub const ALL: &[$crate::Tag] = &[$($name),*];
    };
}

/// Code page 0: sync commands.
pub mod airsync {
    code_page!(AirSync {
        SYNC = 0x05 => "Sync",
        RESPONSES = 0x06 => "Responses",
        ADD = 0x07 => "Add",
        MODIFY = 0x08 => "Change",
        REMOVE = 0x09 => "Delete",
        FETCH = 0x0A => "Fetch",
        SYNC_KEY = 0x0B => "SyncKey",
        CLIENT_ENTRY_ID = 0x0C => "ClientId",
        SERVER_ENTRY_ID = 0x0D => "ServerId",
        STATUS = 0x0E => "Status",
        FOLDER = 0x0F => "Collection",
        FOLDER_TYPE = 0x10 => "Class",
        FOLDER_ID = 0x12 => "CollectionId",
        MORE_AVAILABLE = 0x14 => "MoreAvailable",
        WINDOW_SIZE = 0x15 => "WindowSize",
        PERFORM = 0x16 => "Commands",
        DATA = 0x1D => "ApplicationData",
    });
}

/// Code page 1: contact fields.
pub mod contacts {
    code_page!(Contacts {
        BIRTHDAY = 0x08 => "Birthday",
        BUSINESS_PHONE_NUMBER = 0x13 => "BusinessTelephoneNumber",
        COMPANY_NAME = 0x19 => "CompanyName",
        EMAIL1_ADDRESS = 0x1B => "Email1Address",
        EMAIL2_ADDRESS = 0x1C => "Email2Address",
        EMAIL3_ADDRESS = 0x1D => "Email3Address",
        FILE_AS = 0x1E => "FileAs",
        FIRST_NAME = 0x1F => "FirstName",
        HOME_PHONE_NUMBER = 0x27 => "HomeTelephoneNumber",
        JOB_TITLE = 0x28 => "JobTitle",
        LAST_NAME = 0x29 => "LastName",
        MIDDLE_NAME = 0x2A => "MiddleName",
        MOBILE_PHONE_NUMBER = 0x2B => "MobileTelephoneNumber",
    });
}

/// Code page 2: mail fields.
pub mod email {
    code_page!(Email {
        BODY = 0x0C => "Body",
        BODY_SIZE = 0x0D => "BodySize",
        BODY_TRUNCATED = 0x0E => "BodyTruncated",
        DATE_RECEIVED = 0x0F => "DateReceived",
        DISPLAY_TO = 0x11 => "DisplayTo",
        IMPORTANCE = 0x12 => "Importance",
        MESSAGE_CLASS = 0x13 => "MessageClass",
        SUBJECT = 0x14 => "Subject",
        READ = 0x15 => "Read",
        TO = 0x16 => "To",
        CC = 0x17 => "Cc",
        FROM = 0x18 => "From",
        REPLY_TO = 0x19 => "ReplyTo",
        THREAD_TOPIC = 0x35 => "ThreadTopic",
    });
}

/// Code page 4: calendar fields.
pub mod calendar {
    code_page!(Calendar {
        ALL_DAY_EVENT = 0x06 => "AllDayEvent",
        ATTENDEES = 0x07 => "Attendees",
        ATTENDEE = 0x08 => "Attendee",
        ATTENDEE_EMAIL = 0x09 => "Email",
        ATTENDEE_NAME = 0x0A => "Name",
        BODY = 0x0B => "Body",
        BUSY_STATUS = 0x0D => "BusyStatus",
        DTSTAMP = 0x11 => "DtStamp",
        END_TIME = 0x12 => "EndTime",
        LOCATION = 0x17 => "Location",
        ORGANIZER_EMAIL = 0x19 => "OrganizerEmail",
        ORGANIZER_NAME = 0x1A => "OrganizerName",
        REMINDER = 0x24 => "Reminder",
        SENSITIVITY = 0x25 => "Sensitivity",
        SUBJECT = 0x26 => "Subject",
        START_TIME = 0x27 => "StartTime",
        UID = 0x28 => "UID",
    });
}

/// Code page 7: folder hierarchy.
pub mod folder_hierarchy {
    code_page!(FolderHierarchy {
        FOLDERS = 0x05 => "Folders",
        FOLDER = 0x06 => "Folder",
        DISPLAY_NAME = 0x07 => "DisplayName",
        SERVER_ENTRY_ID = 0x08 => "ServerId",
        PARENT_ID = 0x09 => "ParentId",
        TYPE = 0x0A => "Type",
        STATUS = 0x0C => "Status",
        CHANGES = 0x0E => "Changes",
        ADD = 0x0F => "Add",
        REMOVE = 0x10 => "Delete",
        UPDATE = 0x11 => "Update",
        SYNC_KEY = 0x12 => "SyncKey",
        COUNT = 0x17 => "Count",
    });
}
