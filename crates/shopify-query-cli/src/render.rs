use crate::output_utils;
use anyhow::Context;
use shopify_query::QueryRequest;
use shopify_query::description::QueryDescription;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use tokio::task::JoinSet;
use walkdir::WalkDir;

const STDIN_PATH: &str = "-";

#[derive(Debug, clap::Args)]
pub(crate) struct RenderArgs {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for query \
             description files within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) description_file_exts: Vec<String>,

    #[arg(
        help="Print each document as a GraphQL HTTP request body \
             (`{\"query\": ..., \"variables\": ...}`) instead of raw text.",
        long,
    )]
    pub(crate) json_body: bool,

    #[arg(
        help="Paths to one or more JSON query description files or \
             directories containing them. Use `-` to read a single \
             description from stdin.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// Render every description found under the given paths.
///
/// Descriptions are read and rendered concurrently, but documents are
/// returned in input order (directory contents sorted by file name),
/// separated by a blank line. Any failure fails the whole run, with every
/// problem listed in the error.
pub(crate) async fn run(args: RenderArgs) -> anyhow::Result<String> {
    let mut errors: Vec<anyhow::Error> = vec![];

    log::debug!("Scanning {} input paths...", args.file_or_dir_paths.len());
    let paths = collect_description_paths(
        &args.file_or_dir_paths,
        &args.description_file_exts,
        &mut errors,
    );
    if paths.is_empty() && errors.is_empty() {
        anyhow::bail!("No query description files found.");
    }

    let mut tasks = JoinSet::new();
    for (idx, path) in paths.iter().cloned().enumerate() {
        let json_body = args.json_body;
        tasks.spawn(async move {
            let result = read_description(&path).await
                .and_then(|source| render_description(&source, json_body))
                .with_context(|| format!("Failed to render {}", path.display()));
            (idx, result)
        });
    }

    let mut documents: Vec<Option<String>> = vec![None; paths.len()];
    let mut render_errors = vec![];
    while let Some(joined) = tasks.join_next().await {
        let (idx, result) = joined.context("Render task failed to complete")?;
        match result {
            Ok(document) => documents[idx] = Some(document),
            Err(e) => render_errors.push((idx, e)),
        }
    }
    render_errors.sort_by_key(|(idx, _)| *idx);
    errors.extend(render_errors.into_iter().map(|(_, e)| e));

    if !errors.is_empty() {
        anyhow::bail!(
            "Failed to render {} of {} query descriptions:\n{}",
            errors.len(),
            paths.len(),
            errors.iter()
                .map(|e| format!("  * {e:#}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    let documents: Vec<String> = documents.into_iter().flatten().collect();
    log::info!(
        "{} Rendered {} query descriptions.",
        output_utils::GREEN_CHECK,
        documents.len(),
    );
    Ok(documents.join("\n\n"))
}

/// Expand directories into the description files beneath them. Explicitly
/// named files are kept regardless of extension. Stdin can only be read once,
/// so a repeated `-` is reported as an error.
pub(crate) fn collect_description_paths(
    file_or_dir_paths: &[PathBuf],
    description_file_exts: &[String],
    errors: &mut Vec<anyhow::Error>,
) -> Vec<PathBuf> {
    let exts: HashSet<&str> =
        description_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    let mut paths = vec![];
    let mut stdin_requested = false;
    for path in file_or_dir_paths {
        if path.as_os_str() == STDIN_PATH {
            if stdin_requested {
                errors.push(anyhow::anyhow!(
                    "`{STDIN_PATH}` (stdin) may only be given once"
                ));
            } else {
                stdin_requested = true;
                paths.push(path.to_owned());
            }
            continue;
        }
        if path.is_file() {
            paths.push(path.to_owned());
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    if entry_path.extension()
                        .map(|ext| ext.to_string_lossy())
                        .is_some_and(|ext| exts.contains(&*ext)) {
                        log::trace!("Found description file at {entry_path:#?}.");
                        paths.push(entry_path.to_owned());
                    }
                },

                Err(e) => errors.push(
                    anyhow::Error::from(e)
                        .context(format!("Failed to scan {}", path.display())),
                ),
            }
        }
    }
    paths
}

async fn read_description(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let source = tokio::task::spawn_blocking(|| {
            std::io::read_to_string(std::io::stdin())
        }).await??;
        Ok(source)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Render a JSON query description, optionally wrapped as a GraphQL HTTP
/// request body.
pub(crate) fn render_description(
    source: &str,
    json_body: bool,
) -> anyhow::Result<String> {
    let description: QueryDescription =
        serde_json::from_str(source)
            .context("Invalid query description")?;
    let request = QueryRequest::try_from(&description)?;
    let query = shopify_query::render(&request);
    log::debug!(
        "Rendered {} `{}` ({} bytes).",
        request.kind(),
        request.entity(),
        query.len(),
    );

    if !json_body {
        return Ok(query);
    }

    let mut body = serde_json::Map::new();
    body.insert("query".to_string(), serde_json::Value::String(query));
    let variables = description.variable_values();
    if !variables.is_empty() {
        body.insert("variables".to_string(), serde_json::Value::Object(variables));
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(body))?)
}
