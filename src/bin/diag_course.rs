/// Course diagnostic: import every game file in a directory, print what
/// the decoder reported, then re-encode each file and compare.
///
/// Usage: diag_course <dir> [--failsafe]

use jnse::io::pack::unpack;
use jnse::io::record::RecordReaderConfiguration;
use jnse::io::{GameFileConfiguration, GameFileKind, RecordCodec};
use jnse::{Course, NotificationCollection};
use std::collections::BTreeMap;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let dir = args.get(1).map(String::as_str).unwrap_or(".");
    let failsafe = args.iter().any(|a| a == "--failsafe");

    let config = GameFileConfiguration {
        reader: RecordReaderConfiguration { failsafe },
        ..Default::default()
    };

    let files = match read_game_files(Path::new(dir)) {
        Ok(f) => f,
        Err(e) => {
            println!("Cannot read {}: {}", dir, e);
            std::process::exit(1);
        }
    };
    if files.is_empty() {
        println!("No game files in {}", dir);
        return;
    }

    // 1. Import
    println!("═══════════════════ import ═══════════════════");
    let mut course = Course::new();
    let mut imported = Vec::new();
    for (name, bytes) in &files {
        match course.import_file(name, bytes, &config) {
            Ok(notes) => {
                println!("  {:<14} {:>6} bytes  OK", name, bytes.len());
                for n in &notes {
                    println!("      {}", n);
                }
                if GameFileKind::from_file_name(name).is_some_and(|(_, k)| k.is_supported()) {
                    imported.push(name.clone());
                }
            }
            Err(e) => println!("  {:<14} {:>6} bytes  FAILED: {}", name, bytes.len(), e),
        }
    }

    println!("\n  Name: {:?}", course.name);
    println!("  Total par: {}", course.total_par());
    for (i, r) in course.routings.iter().enumerate() {
        println!(
            "  H{:<2} par {} frame {} vertices {}",
            i + 1,
            r.par,
            r.frame,
            r.vertices.len()
        );
    }

    // 2. Re-encode and compare the unpacked records
    println!("\n═══════════════════ round trip ═══════════════════");
    let exported: BTreeMap<String, Vec<u8>> = match course.export_files("diag", &config) {
        Ok(f) => f
            .into_iter()
            .filter_map(|(n, d)| {
                let (_, kind) = GameFileKind::from_file_name(&n)?;
                Some((kind.extension(), d))
            })
            .collect(),
        Err(e) => {
            println!("  export FAILED: {}", e);
            std::process::exit(1);
        }
    };

    let mut mismatches = 0;
    for name in &imported {
        let Some((_, kind)) = GameFileKind::from_file_name(name) else {
            continue;
        };
        let (Some(original), Some(encoded)) = (files.get(name), exported.get(&kind.extension()))
        else {
            continue;
        };
        match compare(kind, original, encoded) {
            Ok(None) => println!("  {:<14} identical", name),
            Ok(Some(offset)) => {
                mismatches += 1;
                println!("  {:<14} differs at byte {}", name, offset);
            }
            Err(e) => {
                mismatches += 1;
                println!("  {:<14} compare FAILED: {}", name, e);
            }
        }
    }
    println!("\n  {} file(s) compared, {} mismatch(es)", imported.len(), mismatches);
}

fn read_game_files(dir: &Path) -> std::io::Result<BTreeMap<String, Vec<u8>>> {
    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if GameFileKind::from_file_name(name).is_some() {
            files.insert(name.to_string(), std::fs::read(&path)?);
        }
    }
    Ok(files)
}

/// First differing offset of the raw records, if any
fn compare(kind: GameFileKind, original: &[u8], encoded: &[u8]) -> jnse::Result<Option<usize>> {
    let mut notes = NotificationCollection::new();
    let (a, b, size) = if kind.is_packed() {
        let size = match kind {
            GameFileKind::Plot => jnse::Plot::RECORD_SIZE,
            GameFileKind::Panorama => jnse::Panorama::RECORD_SIZE,
            _ => jnse::Hole::RECORD_SIZE,
        };
        (unpack(original, &mut notes)?, unpack(encoded, &mut notes)?, size)
    } else {
        (original.to_vec(), encoded.to_vec(), Course::RECORD_SIZE)
    };

    let diff = (0..size).find(|&i| a.get(i) != b.get(i));
    Ok(diff)
}
