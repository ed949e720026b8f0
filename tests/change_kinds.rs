use flicker::watch::ChangeKind;
use notify::event::{
    AccessKind, CreateKind, DataChange, EventKind, MetadataKind, ModifyKind, RemoveKind, RenameMode,
};

#[test]
fn data_modifications_classify_as_write() {
    assert_eq!(
        ChangeKind::classify(&EventKind::Modify(ModifyKind::Data(DataChange::Content))),
        Some(ChangeKind::Write)
    );
    assert_eq!(
        ChangeKind::classify(&EventKind::Modify(ModifyKind::Data(DataChange::Any))),
        Some(ChangeKind::Write)
    );
    assert_eq!(
        ChangeKind::classify(&EventKind::Modify(ModifyKind::Any)),
        Some(ChangeKind::Write)
    );
}

#[test]
fn structural_changes_classify_to_their_kind() {
    assert_eq!(
        ChangeKind::classify(&EventKind::Create(CreateKind::File)),
        Some(ChangeKind::Create)
    );
    assert_eq!(
        ChangeKind::classify(&EventKind::Remove(RemoveKind::File)),
        Some(ChangeKind::Remove)
    );
    assert_eq!(
        ChangeKind::classify(&EventKind::Modify(ModifyKind::Name(RenameMode::Any))),
        Some(ChangeKind::Rename)
    );
    assert_eq!(
        ChangeKind::classify(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::Permissions
        ))),
        Some(ChangeKind::Chmod)
    );
}

#[test]
fn access_and_unknown_events_are_dropped() {
    assert_eq!(
        ChangeKind::classify(&EventKind::Access(AccessKind::Read)),
        None
    );
    assert_eq!(ChangeKind::classify(&EventKind::Any), None);
    assert_eq!(ChangeKind::classify(&EventKind::Other), None);
}

#[test]
fn only_writes_trigger_a_reload() {
    assert!(ChangeKind::Write.triggers_reload());

    for kind in [
        ChangeKind::Create,
        ChangeKind::Remove,
        ChangeKind::Rename,
        ChangeKind::Chmod,
    ] {
        assert!(!kind.triggers_reload());
    }
}
