use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SAMPLE_WALK: &str = "\
.1.3.6.1.2.1.1.3.0 = Timeticks: (512933) 1:25:29.33\n\
.1.3.6.1.2.1.1.7.0 = INTEGER: 72\n";

const SAMPLE_SAP: &str = "\
1.3.6.1.2.1.1.3.0, TimeTicks, 512933\n\
1.3.6.1.2.1.1.7.0, Integer, 72";

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn import(input: &Path, store: &Path) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sapwalk-cli"));
    cmd.args([
        "import",
        "--in",
        input.to_str().unwrap(),
        "--store",
        store.to_str().unwrap(),
    ]);
    let out = run_ok(&mut cmd);
    String::from_utf8(out.stdout)
        .expect("key is utf-8")
        .trim()
        .to_string()
}

#[test]
fn import_list_export_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("core-switch.snmpwalk");
    let store = dir.path().join("store");
    fs::write(&input, SAMPLE_WALK).expect("write sample walk");

    let key = import(&input, &store);
    assert_eq!(key.len(), 32, "key should be 16 hex bytes");

    // Both blobs and the metadata record exist under the key.
    assert!(store.join(format!("{key}.snmp")).exists());
    assert!(store.join(format!("{key}.sap")).exists());
    assert!(store.join(format!("{key}.meta")).exists());

    // list prints key, date, and the name derived from the filename.
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sapwalk-cli"));
    cmd.args(["list", "--store", store.to_str().unwrap()]);
    let out = run_ok(&mut cmd);
    let listing = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(listing.contains(&key));
    assert!(listing.contains("core-switch"));

    // export delivers the converted records.
    let exported = dir.path().join("exported.sapwalk2");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sapwalk-cli"));
    cmd.args([
        "export",
        "--store",
        store.to_str().unwrap(),
        "--key",
        &key,
        "--out",
        exported.to_str().unwrap(),
    ]);
    run_ok(&mut cmd);

    let got = fs::read_to_string(&exported).expect("read exported records");
    assert_eq!(got, SAMPLE_SAP);
}

#[test]
fn reimporting_identical_bytes_lands_on_the_same_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("walk.snmpwalk");
    let store = dir.path().join("store");
    fs::write(&input, SAMPLE_WALK).expect("write sample walk");

    let key1 = import(&input, &store);
    let key2 = import(&input, &store);
    assert_eq!(key1, key2, "content key should be stable");

    let metas = fs::read_dir(&store)
        .expect("read store dir")
        .filter(|e| {
            e.as_ref().unwrap().path().extension().and_then(|x| x.to_str()) == Some("meta")
        })
        .count();
    assert_eq!(metas, 1, "re-import should overwrite its own entry");
}
