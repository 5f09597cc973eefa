//! Integration tests for the relata CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn write_movie(dir: &Path, movie_id: &str, word: &str) {
    let corenlp = dir.join("corenlp_plot_summaries");
    std::fs::create_dir_all(&corenlp).unwrap();
    std::fs::write(
        dir.join(format!("character.metadata_{movie_id}.csv")),
        "character_name,freebase_character_id\nAlice,c1\n",
    )
    .unwrap();
    std::fs::write(
        corenlp.join(format!("tokens_{movie_id}.csv")),
        format!("sentence_id,token_id,word,lemma\n1,1,{word},{word}\n1,2,died,die\n"),
    )
    .unwrap();
    std::fs::write(
        corenlp.join(format!("dependencies_{movie_id}.csv")),
        "sentence_id,type,governor,governor_idx,dependent,dependent_idx\n\
         1,nsubj,died,2,x,1\n",
    )
    .unwrap();
    std::fs::write(
        corenlp.join(format!("coreferences_{movie_id}.csv")),
        "representative,sentence_id,start,end,head\n",
    )
    .unwrap();
}

fn relata() -> Command {
    Command::cargo_bin("relata").unwrap()
}

#[test]
fn extract_writes_bags_and_reports_summary() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_movie(input.path(), "330", "Alice");
    write_movie(input.path(), "975900", "Nobody"); // skipped: no mention

    relata()
        .arg("extract")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Built character bags for 1/2 movies"));

    assert!(output.path().join("character_bags_330.json").exists());
    assert!(!output.path().join("character_bags_975900.json").exists());
}

#[test]
fn extract_with_explicit_ids_only_touches_those() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_movie(input.path(), "1", "Alice");
    write_movie(input.path(), "2", "Alice");

    relata()
        .arg("extract")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .arg("--movie-ids")
        .arg("2")
        .assert()
        .success();

    assert!(!output.path().join("character_bags_1.json").exists());
    assert!(output.path().join("character_bags_2.json").exists());
}

#[test]
fn extract_without_movies_fails() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(input.path().join("corenlp_plot_summaries")).unwrap();

    relata()
        .arg("extract")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no movies to process"));
}

#[test]
fn inspect_prints_records_to_stdout() {
    let input = tempfile::tempdir().unwrap();
    write_movie(input.path(), "330", "Alice");

    relata()
        .arg("inspect")
        .arg("330")
        .arg("-i")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"agent verb\""))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn inspect_reports_skip_reason() {
    let input = tempfile::tempdir().unwrap();
    write_movie(input.path(), "330", "Nobody");

    relata()
        .arg("inspect")
        .arg("330")
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no mentions found"));
}
