use {super::*, std::io::Cursor};

/// builds a raw login table record.
fn record(id: &str, user: &str, line: &str, host: &str) -> Vec<u8> {
    Record {
        line: line.to_owned(),
        id: id.to_owned(),
        user: user.to_owned(),
        host: host.to_owned(),
    }
    .encode()
}

fn table(records: &[Vec<u8>]) -> Cursor<Vec<u8>> {
    Cursor::new(records.concat())
}

#[test]
fn decode() {
    let raw = record("ts/0", "kate", "pts/0", "10.0.0.2");
    let record = Record::decode(raw.as_slice().try_into().unwrap());
    assert_eq!(record, Record {
        line: "pts/0".to_owned(),
        id: "ts/0".to_owned(),
        user: "kate".to_owned(),
        host: "10.0.0.2".to_owned(),
    });
}

#[test]
fn full_width_field() {
    let user = "x".repeat(32);
    let raw = record("1", &user, "tty1", "");
    let record = Record::decode(raw.as_slice().try_into().unwrap());
    assert_eq!(record.user, user);
}

#[test]
fn filters_housekeeping_records() {
    let sessions = Session::list(table(&[
        record("~~", "reboot", "~", "6.1.0"),
        record("tty1", "LOGIN", "tty1", ""),
        record("tty2", "", "tty2", ""),
        record("tty3", "kate", "tty3", ""),
        record("ts/1", "root", "pts/1", "remote"),
    ]))
    .unwrap();

    assert_eq!(sessions, vec![
        Session {
            user: "kate".to_owned(),
            line: "tty3".to_owned(),
            host: "".to_owned(),
        },
        Session {
            user: "root".to_owned(),
            line: "pts/1".to_owned(),
            host: "remote".to_owned(),
        },
    ]);
}

#[test]
fn keeps_table_order() {
    let sessions = Session::list(table(&[
        record("ts/2", "zed", "pts/2", ""),
        record("ts/0", "amy", "pts/0", ""),
    ]))
    .unwrap();

    let users = sessions.iter().map(|s| s.user.as_str()).collect::<Vec<_>>();
    assert_eq!(users, ["zed", "amy"]);
}

#[test]
fn empty_table() {
    assert!(Session::list(Cursor::new(Vec::new())).unwrap().is_empty());
}

#[test]
fn trailing_partial_record() {
    let mut raw = record("ts/0", "kate", "pts/0", "");
    raw.extend_from_slice(&[0; 100]);
    let sessions = Session::list(Cursor::new(raw)).unwrap();
    assert_eq!(sessions.len(), 1);
}

#[test]
fn from_file() {
    use std::{fs::File, io::Write};

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&record("ts/0", "kate", "pts/0", "laptop")).unwrap();

    let sessions = Session::list(File::open(file.path()).unwrap()).unwrap();
    assert_eq!(sessions[0].host, "laptop");
}
