// crates/arsenal-core/tests/service.rs - End-to-end behaviour of ArsenalService
//
// Every test gets its own temporary home directory, so config and store
// files never leak between tests or into the real home.

use arsenal_core::{
    ArsenalError, ArsenalPaths, ArsenalService, CommandFields, CommandStore, CommandsFile,
    ConfigError, StoreError,
};
use std::fs;
use tempfile::TempDir;

fn service(temp: &TempDir) -> ArsenalService {
    ArsenalService::new(ArsenalPaths::new(temp.path()))
}

fn initialized(temp: &TempDir) -> ArsenalService {
    let mut svc = service(temp);
    svc.initialize_default().unwrap();
    svc
}

fn ids(svc: &mut ArsenalService, group: &str) -> Vec<u32> {
    svc.get_groups().unwrap()[group]
        .commands
        .iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn initialize_default_creates_store_and_config() {
    let temp = TempDir::new().unwrap();
    let mut svc = service(&temp);
    assert!(!svc.has_config());

    let path = svc.initialize_default().unwrap();

    assert_eq!(path, temp.path().join(".nuke-arsenal").join("commands.json"));
    assert!(svc.has_config());
    assert_eq!(svc.get_config().unwrap().data_path, path);
    assert_eq!(svc.data_path(), Some(path.as_path()));
    assert_eq!(CommandStore::read(&path).unwrap(), CommandsFile::default());
}

#[test]
fn initialize_default_twice_keeps_populated_store() {
    let temp = TempDir::new().unwrap();
    let mut svc = service(&temp);

    let first = svc.initialize_default().unwrap();
    svc.add_group("tools", "Tools", "hammer", "").unwrap();
    svc.add_command("tools", CommandFields::new("ls -la")).unwrap();
    let before = fs::read_to_string(&first).unwrap();

    let second = service(&temp).initialize_default().unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), before);
}

#[test]
fn initialize_default_adopts_existing_store_without_config() {
    let temp = TempDir::new().unwrap();
    let paths = ArsenalPaths::new(temp.path());
    let mut doc = CommandsFile::default();
    doc.groups.insert(
        "kept".to_string(),
        arsenal_core::Group::new("Kept", "", "pre-existing"),
    );
    CommandStore::write(&paths.default_data_path(), &doc).unwrap();

    let mut svc = service(&temp);
    let path = svc.initialize_default().unwrap();

    assert_eq!(CommandStore::read(&path).unwrap(), doc);
    assert!(svc.has_config());
}

#[test]
fn initialize_default_resets_malformed_store_keeping_backup() {
    let temp = TempDir::new().unwrap();
    let path = ArsenalPaths::new(temp.path()).default_data_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json at all").unwrap();

    let mut svc = service(&temp);
    let active = svc.initialize_default().unwrap();

    assert_eq!(active, path);
    assert!(svc.has_config());
    assert_eq!(CommandStore::read(&path).unwrap(), CommandsFile::default());
    let backup = path.with_file_name("commands.json.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), "not json at all");
}

#[test]
fn initialize_default_reports_store_write_failure() {
    let temp = TempDir::new().unwrap();
    // a directory where the store file should be cannot be replaced
    let path = ArsenalPaths::new(temp.path()).default_data_path();
    fs::create_dir_all(&path).unwrap();

    let mut svc = service(&temp);
    let err = svc.initialize_default().unwrap_err();

    assert!(matches!(err, ArsenalError::Store(StoreError::Write { .. })));
    assert!(!svc.has_config());
}

#[test]
fn initialize_default_respects_existing_config() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("elsewhere").join("mine.json");
    service(&temp).set_data_path(&custom).unwrap();

    let path = service(&temp).initialize_default().unwrap();

    assert_eq!(path, custom);
    // adopting the config creates nothing
    assert!(!custom.exists());
    assert!(!temp.path().join(".nuke-arsenal").exists());
}

#[test]
fn set_data_path_switches_active_store() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    let other = temp.path().join("other.json");
    CommandStore::write(&other, &CommandsFile::default()).unwrap();

    svc.set_data_path(&other).unwrap();
    svc.add_group("net", "Network", "", "").unwrap();

    assert!(CommandStore::read(&other).unwrap().groups.contains_key("net"));
    assert_eq!(service(&temp).get_config().unwrap().data_path, other);
}

#[test]
fn set_data_path_reports_config_write_failure() {
    let temp = TempDir::new().unwrap();
    let paths = ArsenalPaths::new(temp.path());
    fs::create_dir_all(paths.config_path()).unwrap();

    let mut svc = service(&temp);
    let err = svc.set_data_path(temp.path().join("x.json")).unwrap_err();

    assert!(matches!(err, ArsenalError::Config(ConfigError::Write { .. })));
    assert_eq!(svc.data_path(), None);
}

#[test]
fn configured_store_missing_on_disk_reports_read_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone").join("commands.json");
    service(&temp).set_data_path(&missing).unwrap();

    let err = service(&temp).get_commands().unwrap_err();

    match err {
        ArsenalError::Store(err @ StoreError::Read { .. }) => assert!(err.is_not_found()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn mutations_on_malformed_store_fail_without_writing() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    let path = svc.data_path().unwrap().to_path_buf();
    fs::write(&path, "{ broken").unwrap();

    let err = svc.add_group("web", "Web", "", "").unwrap_err();

    assert!(matches!(err, ArsenalError::Store(StoreError::Malformed { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ broken");
}

#[cfg(unix)]
#[test]
fn symlinked_store_is_written_through() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real.json");
    let link = temp.path().join("link.json");
    CommandStore::write(&real, &CommandsFile::default()).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut svc = service(&temp);
    svc.set_data_path(&link).unwrap();
    svc.add_group("net", "Network", "", "").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(CommandStore::read(&real).unwrap().groups.contains_key("net"));
}

#[test]
fn data_path_is_resolved_lazily_from_config() {
    let temp = TempDir::new().unwrap();
    initialized(&temp).add_group("web", "Web", "", "").unwrap();

    let mut fresh = service(&temp);
    assert_eq!(fresh.data_path(), None);

    assert!(fresh.get_groups().unwrap().contains_key("web"));
    assert!(fresh.data_path().is_some());
}

#[test]
fn operations_without_config_report_not_configured() {
    let temp = TempDir::new().unwrap();
    let mut svc = service(&temp);

    assert!(matches!(svc.get_commands(), Err(ArsenalError::NotConfigured)));
    assert!(matches!(svc.search(""), Err(ArsenalError::NotConfigured)));
    assert!(matches!(
        svc.get_config(),
        Err(ArsenalError::Config(ConfigError::Missing(_)))
    ));
}

#[test]
fn use_data_path_does_not_write_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    CommandStore::write(&path, &CommandsFile::default()).unwrap();

    let mut svc = service(&temp);
    svc.use_data_path(&path);
    svc.add_group("tmp", "Temp", "", "").unwrap();

    assert!(!svc.has_config());
    assert!(CommandStore::read(&path).unwrap().groups.contains_key("tmp"));
}

#[test]
fn add_group_upsert_resets_commands() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("tools", "Tools", "hammer", "old").unwrap();
    svc.add_command("tools", CommandFields::new("make")).unwrap();

    svc.add_group("tools", "Toolbox", "wrench", "new").unwrap();

    let groups = svc.get_groups().unwrap();
    let group = &groups["tools"];
    assert_eq!(group.name, "Toolbox");
    assert_eq!(group.icon, "wrench");
    assert_eq!(group.description, "new");
    assert!(group.commands.is_empty());
}

#[test]
fn delete_group_removes_and_tolerates_missing() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("a", "A", "", "").unwrap();
    svc.add_group("b", "B", "", "").unwrap();

    svc.delete_group("a").unwrap();
    svc.delete_group("missing").unwrap();

    let keys: Vec<_> = svc.get_groups().unwrap().into_keys().collect();
    assert_eq!(keys, vec!["b".to_string()]);
}

#[test]
fn add_command_assigns_next_id_and_appends() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("tools", "Tools", "", "").unwrap();

    let first = svc
        .add_command(
            "tools",
            CommandFields::new("tar xzf a.tgz")
                .description("extract")
                .output("")
                .note("x = extract")
                .tags(["archive"]),
        )
        .unwrap();
    let second = svc.add_command("tools", CommandFields::new("du -sh")).unwrap();

    assert_eq!(first, Some(1));
    assert_eq!(second, Some(2));
    assert_eq!(ids(&mut svc, "tools"), vec![1, 2]);

    let groups = svc.get_groups().unwrap();
    let stored = &groups["tools"].commands[0];
    assert_eq!(stored.note, "x = extract");
    assert_eq!(stored.tags, vec!["archive".to_string()]);
}

#[test]
fn add_command_to_missing_group_is_silent_noop() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    let path = svc.data_path().unwrap().to_path_buf();
    let before = fs::read(&path).unwrap();

    let id = svc.add_command("g1", CommandFields::new("whoami")).unwrap();

    assert_eq!(id, None);
    assert_eq!(fs::read(&path).unwrap(), before);
    assert!(svc.get_groups().unwrap().is_empty());
}

#[test]
fn update_command_overwrites_fields_but_not_identity() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("tools", "Tools", "", "").unwrap();
    svc.add_command("tools", CommandFields::new("ping host").tags(["net"]))
        .unwrap();
    let original = svc.get_groups().unwrap()["tools"].commands[0].clone();

    let fields = CommandFields::new("ping -c 4 host")
        .description("four pings")
        .output("4 packets transmitted")
        .note("")
        .tags(Vec::<String>::new());
    svc.update_command("tools", 1, fields.clone()).unwrap();

    let updated = svc.get_groups().unwrap()["tools"].commands[0].clone();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created, original.created);
    assert_eq!(CommandFields::from(&updated), fields);
}

#[test]
fn update_and_delete_missing_targets_are_noops() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("tools", "Tools", "", "").unwrap();
    svc.add_command("tools", CommandFields::new("id")).unwrap();
    let before = svc.get_commands().unwrap();

    svc.update_command("tools", 42, CommandFields::new("changed")).unwrap();
    svc.delete_command("tools", 42).unwrap();
    svc.update_command("nope", 1, CommandFields::new("changed")).unwrap();
    svc.delete_command("nope", 1).unwrap();

    assert_eq!(svc.get_commands().unwrap(), before);
}

#[test]
fn delete_command_preserves_order_and_next_id_skips_gap() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("tools", "Tools", "", "").unwrap();
    for cmd in ["one", "two", "three"] {
        svc.add_command("tools", CommandFields::new(cmd)).unwrap();
    }

    svc.delete_command("tools", 2).unwrap();
    assert_eq!(ids(&mut svc, "tools"), vec![1, 3]);

    let id = svc.add_command("tools", CommandFields::new("four")).unwrap();

    assert_eq!(id, Some(4));
    assert_eq!(ids(&mut svc, "tools"), vec![1, 3, 4]);
    let cmds: Vec<_> = svc.get_groups().unwrap()["tools"]
        .commands
        .iter()
        .map(|c| c.cmd.clone())
        .collect();
    assert_eq!(cmds, vec!["one", "three", "four"]);
}

#[test]
fn search_across_groups() {
    let temp = TempDir::new().unwrap();
    let mut svc = initialized(&temp);
    svc.add_group("web", "Web", "", "").unwrap();
    svc.add_group("db", "Database", "", "").unwrap();
    svc.add_command("web", CommandFields::new("curl -sI URL").tags(["HTTP"]))
        .unwrap();
    svc.add_command("web", CommandFields::new("wget -qO- URL")).unwrap();
    svc.add_command(
        "db",
        CommandFields::new("psql -h host").description("Postgres over http tunnel"),
    )
    .unwrap();

    let all = svc.search("").unwrap();
    let keys: Vec<_> = all
        .iter()
        .map(|r| (r.group_key.as_str(), r.command.id))
        .collect();
    assert_eq!(keys, vec![("db", 1), ("web", 1), ("web", 2)]);

    let http = svc.search("Http").unwrap();
    let keys: Vec<_> = http
        .iter()
        .map(|r| (r.group_key.as_str(), r.command.id))
        .collect();
    assert_eq!(keys, vec![("db", 1), ("web", 1)]);
    assert_eq!(http[0].group_name, "Database");
}
