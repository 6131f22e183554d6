use anyhow::Result;
use cord_scaffold::core::{FieldDecl, IdentifierStyle};
use cord_scaffold::{FileNameSource, ScaffoldConfig, ScaffoldEngine, ScaffoldError, ScaffoldPipeline};
use std::path::Path;
use tempfile::TempDir;

fn run_with(path: &Path, config: ScaffoldConfig) -> (cord_scaffold::Result<usize>, String) {
    let engine = ScaffoldEngine::new(ScaffoldPipeline::new(FileNameSource::new(path), config));
    let mut out = Vec::new();
    let result = engine.run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

fn write_names(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("discord_objects_names.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_single_channel_block() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "Channel\n");

    let (result, output) = run_with(&path, ScaffoldConfig::default());

    assert_eq!(result?, 1);
    assert_eq!(
        output,
        "typedef struct cord_channel_t {\n    int user_id;\n} cord_channel_t;\n\n"
    );
    Ok(())
}

#[test]
fn test_two_word_name() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "Guild Member");

    let (result, output) = run_with(&path, ScaffoldConfig::default());

    assert_eq!(result?, 1);
    assert!(output.starts_with("typedef struct cord_guild_member_t {\n"));
    assert!(output.contains("} cord_guild_member_t;\n"));
    Ok(())
}

#[test]
fn test_one_block_per_line_in_file_order() -> Result<()> {
    let dir = TempDir::new()?;
    let names = [
        "Channel",
        "Message",
        "Followed Channel",
        "Reaction",
        "Overwrite",
        "Thread Metadata",
        "Thread Member",
        "Default Reaction",
        "Forum Tag",
        "Embed",
    ];
    let path = write_names(&dir, &(names.join("\n") + "\n"));

    let (result, output) = run_with(&path, ScaffoldConfig::default());
    assert_eq!(result?, names.len());

    let openings: Vec<&str> = output
        .lines()
        .filter_map(|l| l.strip_prefix("typedef struct "))
        .map(|l| l.trim_end_matches(" {"))
        .collect();
    let expected: Vec<String> = names
        .iter()
        .map(|n| format!("cord_{}_t", n.to_lowercase().replace(' ', "_")))
        .collect();
    assert_eq!(openings, expected);
    assert_eq!(output.matches("    int user_id;\n").count(), names.len());
    Ok(())
}

#[test]
fn test_mixed_line_endings_one_block_per_line() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "Channel\rGuild Member\r\nRole\n");

    let (result, output) = run_with(&path, ScaffoldConfig::default());

    assert_eq!(result?, 3);
    assert!(output.contains("} cord_channel_t;\n"));
    assert!(output.contains("} cord_guild_member_t;\n"));
    assert!(output.contains("} cord_role_t;\n"));
    Ok(())
}

#[test]
fn test_identifiers_round_trip_to_words() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "Allowed Mentions\nMessage   Component\n");
    let style = IdentifierStyle::default();

    let (result, output) = run_with(&path, ScaffoldConfig::default());
    result?;

    let words: Vec<Vec<&str>> = output
        .lines()
        .filter_map(|l| l.strip_prefix("} "))
        .filter_map(|l| l.strip_suffix(';'))
        .filter_map(|id| style.words_of(id))
        .collect();
    assert_eq!(
        words,
        vec![vec!["allowed", "mentions"], vec!["message", "component"]]
    );
    Ok(())
}

#[test]
fn test_empty_file_emits_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "");

    let (result, output) = run_with(&path, ScaffoldConfig::default());

    assert_eq!(result?, 0);
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_fails_before_output() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("discord_objects_names.txt");

    let (result, output) = run_with(&path, ScaffoldConfig::default());

    assert!(matches!(result, Err(ScaffoldError::IoError(_))));
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_blank_line_policy() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "User\n\nRole\n");

    let (kept, output) = run_with(&path, ScaffoldConfig::default());
    assert_eq!(kept?, 3);
    assert!(output.contains("typedef struct cord__t {\n"));

    let config = ScaffoldConfig {
        skip_blank: true,
        ..ScaffoldConfig::default()
    };
    let (skipped, output) = run_with(&path, config);
    assert_eq!(skipped?, 2);
    assert!(!output.contains("cord__t"));
    Ok(())
}

#[test]
fn test_custom_template_and_init_prototype() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "Role Tag\n");

    let mut config = ScaffoldConfig::default();
    config.template.fields = vec![
        FieldDecl::new("cord_strbuf_t *", "bot_id"),
        FieldDecl::new("bool", "guild_connections"),
    ];
    config.template.init_function = true;

    let (result, output) = run_with(&path, config);
    result?;

    assert_eq!(
        output,
        "typedef struct cord_role_tag_t {\n\
         \x20   cord_strbuf_t *bot_id;\n\
         \x20   bool guild_connections;\n\
         } cord_role_tag_t;\n\
         \n\
         void cord_role_tag_init(cord_role_tag_t *role_tag, cord_bump_t *allocator);\n\
         \n"
    );
    Ok(())
}

#[test]
fn test_list_names() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_names(&dir, "  Guild Member\nChannel  \n");

    let engine = ScaffoldEngine::new(ScaffoldPipeline::new(
        FileNameSource::new(&path),
        ScaffoldConfig::default(),
    ));
    let mut out = Vec::new();
    assert_eq!(engine.list_names(&mut out)?, 2);
    assert_eq!(String::from_utf8(out)?, "Guild Member\nChannel\n");
    Ok(())
}
