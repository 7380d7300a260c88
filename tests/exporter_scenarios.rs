use push_sync::{ChangeImporter, ChangeStreamExporter};
use sync_core::{
    Appointment, Contact, Encode, EntityType, Folder, FolderType, MailMessage, Payload, SyncItem,
};
use tag_sink::{RecordingSink, SinkEvent};
use wbxml_types::tags::{airsync, email, folder_hierarchy};

fn exporter(class: EntityType) -> ChangeStreamExporter<RecordingSink> {
    ChangeStreamExporter::new(RecordingSink::new(), class)
}

fn start(tag: wbxml_types::Tag) -> SinkEvent {
    SinkEvent::Start(tag)
}

fn content(value: &str) -> SinkEvent {
    SinkEvent::Content(value.to_string())
}

fn sample_mail() -> MailMessage {
    MailMessage {
        subject: Some("Status".to_string()),
        read: false,
        ..Default::default()
    }
}

/// Events a payload writes on its own, for comparison inside `DATA`.
fn encoded(payload: &dyn SyncItem) -> Vec<SinkEvent> {
    let mut sink = RecordingSink::new();
    payload.encode(&mut sink).unwrap();
    sink.into_events()
}

#[test]
fn test_new_mail_upsert_writes_add_subtree() {
    let mut exporter = exporter(EntityType::Mail);
    let mail = sample_mail();

    assert!(exporter.import_message_upsert("5", &mail, true).unwrap());

    let mut expected = vec![
        start(airsync::ADD),
        start(airsync::SERVER_ENTRY_ID),
        content("5"),
        SinkEvent::End,
        start(airsync::DATA),
    ];
    expected.extend(encoded(&mail));
    expected.extend([SinkEvent::End, SinkEvent::End]);

    assert_eq!(exporter.sink().events(), expected.as_slice());
    assert!(exporter.sink().is_balanced());
}

#[test]
fn test_repeated_upsert_writes_nothing() {
    let mut exporter = exporter(EntityType::Mail);
    let mail = sample_mail();

    assert!(exporter.import_message_upsert("5", &mail, true).unwrap());
    let written = exporter.sink().events().len();

    assert!(exporter.import_message_upsert("5", &mail, true).unwrap());
    assert_eq!(exporter.sink().events().len(), written);
}

#[test]
fn test_upsert_idempotent_by_id_across_add_and_modify() {
    let mut exporter = exporter(EntityType::Mail);
    let mail = sample_mail();

    for is_new in [true, false, true, false, false] {
        assert!(exporter.import_message_upsert("42", &mail, is_new).unwrap());
    }
    assert!(exporter.import_message_upsert("43", &mail, false).unwrap());

    let sink = exporter.sink();
    assert_eq!(sink.count_starts(airsync::ADD), 1);
    assert_eq!(sink.count_starts(airsync::MODIFY), 1);
    assert_eq!(exporter.seen_count(), 2);
    assert_eq!(exporter.stats().duplicates_skipped, 4);
}

#[test]
fn test_type_mismatch_rejected_without_emission() {
    let mut exporter = exporter(EntityType::Mail);

    let contact = Payload::Contact(Contact {
        first_name: Some("Jane".to_string()),
        ..Default::default()
    });
    let appointment = Appointment::default();

    assert!(!exporter.import_message_upsert("c1", &contact, true).unwrap());
    assert!(!exporter.import_message_upsert("a1", &appointment, false).unwrap());
    assert!(exporter.sink().events().is_empty());
    assert_eq!(exporter.stats().rejected, 2);
}

#[test]
fn test_matching_contact_session_accepts_contacts() {
    let mut exporter = exporter(EntityType::Contact);
    let contact = Contact {
        last_name: Some("Doe".to_string()),
        ..Default::default()
    };
    assert!(exporter.import_message_upsert("c1", &contact, true).unwrap());
    assert!(!exporter.import_message_upsert("m1", &sample_mail(), true).unwrap());
    assert_eq!(exporter.sink().count_starts(airsync::ADD), 1);
}

#[test]
fn test_read_flag_on_mail_session() {
    let mut exporter = exporter(EntityType::Mail);

    assert!(exporter.import_message_read_flag("5", true).unwrap());

    assert_eq!(
        exporter.sink().events(),
        &[
            start(airsync::MODIFY),
            start(airsync::SERVER_ENTRY_ID),
            content("5"),
            SinkEvent::End,
            start(airsync::DATA),
            start(email::READ),
            content("1"),
            SinkEvent::End,
            SinkEvent::End,
            SinkEvent::End,
        ]
    );
}

#[test]
fn test_read_flag_cleared() {
    let mut exporter = exporter(EntityType::Mail);
    assert!(exporter.import_message_read_flag("8", false).unwrap());
    assert!(exporter.sink().events().contains(&content("0")));
}

#[test]
fn test_read_flag_on_non_mail_session_rejected() {
    for class in [EntityType::Contact, EntityType::Calendar, EntityType::Folder] {
        let mut exporter = exporter(class);
        assert!(!exporter.import_message_read_flag("5", true).unwrap());
        assert!(exporter.sink().events().is_empty(), "{class} session wrote output");
    }
}

#[test]
fn test_read_flag_is_not_deduplicated_against_upserts() {
    let mut exporter = exporter(EntityType::Mail);
    exporter
        .import_message_upsert("5", &sample_mail(), true)
        .unwrap();
    exporter.import_message_read_flag("5", true).unwrap();
    exporter.import_message_read_flag("5", true).unwrap();

    assert_eq!(exporter.sink().count_starts(airsync::MODIFY), 2);
}

#[test]
fn test_deletions_are_not_deduplicated() {
    let mut exporter = exporter(EntityType::Mail);

    assert!(exporter.import_message_deletion("X").unwrap());
    assert!(exporter.import_message_deletion("X").unwrap());

    let remove = [
        start(airsync::REMOVE),
        start(airsync::SERVER_ENTRY_ID),
        content("X"),
        SinkEvent::End,
        SinkEvent::End,
    ];
    let expected: Vec<SinkEvent> = remove.iter().chain(remove.iter()).cloned().collect();
    assert_eq!(exporter.sink().events(), expected.as_slice());
}

#[test]
fn test_deletion_after_upsert_still_written() {
    let mut exporter = exporter(EntityType::Mail);
    exporter
        .import_message_upsert("5", &sample_mail(), true)
        .unwrap();
    exporter.import_message_deletion("5").unwrap();

    assert_eq!(exporter.sink().count_starts(airsync::REMOVE), 1);
    // Deleting does not make the id sendable again.
    assert!(exporter
        .import_message_upsert("5", &sample_mail(), true)
        .unwrap());
    assert_eq!(exporter.sink().count_starts(airsync::ADD), 1);
}

#[test]
fn test_move_is_a_silent_no_op() {
    let mut exporter = exporter(EntityType::Mail);
    assert!(exporter.import_message_move("5", "f2").unwrap());
    assert!(exporter.import_message_move("", "").unwrap());
    assert!(exporter.sink().events().is_empty());
    assert_eq!(exporter.stats().moves_ignored, 2);
}

#[test]
fn test_folder_upsert_add_and_update() {
    let mut exporter = exporter(EntityType::Mail);
    let folder = Folder::new("f3", "0", "Invoices", FolderType::UserMail);

    assert_eq!(exporter.import_folder_upsert(&folder, true).unwrap(), "f3");
    assert_eq!(exporter.import_folder_upsert(&folder, false).unwrap(), "f3");

    let mut expected = vec![start(folder_hierarchy::ADD)];
    expected.extend(encoded(&folder));
    expected.push(SinkEvent::End);
    expected.push(start(folder_hierarchy::UPDATE));
    expected.extend(encoded(&folder));
    expected.push(SinkEvent::End);

    assert_eq!(exporter.sink().events(), expected.as_slice());
}

#[test]
fn test_folder_events_ignore_type_filter() {
    let mut exporter = exporter(EntityType::Contact);
    let folder = Folder::new("f4", "0", "Calendar", FolderType::Calendar);
    exporter.import_folder_upsert(&folder, true).unwrap();
    exporter.import_folder_deletion("f4", "0").unwrap();
    assert_eq!(exporter.stats().emitted(), 2);
}

#[test]
fn test_folder_deletion_omits_parent() {
    let mut exporter = exporter(EntityType::Mail);

    assert!(exporter.import_folder_deletion("f9", "parent-1").unwrap());

    assert_eq!(
        exporter.sink().events(),
        &[
            start(folder_hierarchy::REMOVE),
            start(folder_hierarchy::SERVER_ENTRY_ID),
            content("f9"),
            SinkEvent::End,
            SinkEvent::End,
        ]
    );
    assert!(!exporter.sink().render().contains("parent-1"));
}

#[test]
fn test_subtrees_follow_call_order() {
    let mut exporter = exporter(EntityType::Mail);
    let folder = Folder::new("f1", "0", "Inbox", FolderType::Inbox);

    exporter.import_folder_upsert(&folder, true).unwrap();
    exporter
        .import_message_upsert("1", &sample_mail(), true)
        .unwrap();
    exporter.import_message_read_flag("2", true).unwrap();
    exporter.import_message_deletion("3").unwrap();

    let sink = exporter.sink();
    assert!(sink.is_balanced());

    let top_level: Vec<_> = {
        let mut depth = 0usize;
        let mut tags = Vec::new();
        for event in sink.events() {
            match event {
                SinkEvent::Start(tag) => {
                    if depth == 0 {
                        tags.push(*tag);
                    }
                    depth += 1;
                }
                SinkEvent::End => depth -= 1,
                SinkEvent::Content(_) => {}
            }
        }
        tags
    };
    assert_eq!(
        top_level,
        vec![
            folder_hierarchy::ADD,
            airsync::ADD,
            airsync::MODIFY,
            airsync::REMOVE,
        ]
    );
}

#[test]
fn test_rendered_stream() {
    let mut exporter = exporter(EntityType::Mail);
    exporter.import_message_read_flag("5", true).unwrap();

    let expected = "\
<AirSync:Change>
  <AirSync:ServerId>5</AirSync:ServerId>
  <AirSync:ApplicationData>
    <POOMMAIL:Read>1</POOMMAIL:Read>
  </AirSync:ApplicationData>
</AirSync:Change>
";
    assert_eq!(exporter.sink().render(), expected);
}

#[test]
fn test_exporter_over_borrowed_sink() {
    let mut sink = RecordingSink::new();
    {
        let mut exporter = ChangeStreamExporter::new(&mut sink, EntityType::Mail);
        exporter.import_message_deletion("1").unwrap();
    }
    assert_eq!(sink.count_starts(airsync::REMOVE), 1);
}
