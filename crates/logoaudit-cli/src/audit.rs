//! Audit command handler.
//!
//! Walks the sliced-batch directories, applies per-batch sampling, then
//! scores each tile sequentially: prompt → retry-wrapped model call →
//! normalize/validate → flatten. One tile's terminal failure drops that tile
//! and the loop continues; the report is written once at the end.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use logoaudit_core::{AppConfig, ContractVersion};
use logoaudit_model::{build_prompt, parse_audit, retry_with_backoff, AuditResult, GeminiClient};
use logoaudit_report::{flatten_result, sample_batch, write_report, ReportRow};
use logoaudit_slicer::tile_metadata;

/// One tile queued for scoring.
#[derive(Debug, Clone)]
pub(crate) struct TileJob {
    pub path: PathBuf,
    pub source: String,
    pub industry: String,
    pub filename: String,
}

/// Collects tiles from every batch directory under `slices_root`, applying
/// the per-batch sample cap.
fn collect_tiles(
    slices_root: &Path,
    limit: usize,
    seed: Option<u64>,
) -> anyhow::Result<Vec<TileJob>> {
    if !slices_root.is_dir() {
        anyhow::bail!(
            "slices directory {} does not exist; run `logoaudit slice` first",
            slices_root.display()
        );
    }

    let mut batch_dirs: Vec<PathBuf> = std::fs::read_dir(slices_root)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    batch_dirs.sort();

    let mut jobs = Vec::new();
    for batch_dir in batch_dirs {
        let mut tiles: Vec<PathBuf> = std::fs::read_dir(&batch_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("png"))
            .collect();
        tiles.sort();
        let tiles = sample_batch(tiles, limit, seed);

        for path in tiles {
            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let meta = tile_metadata(&filename);
            jobs.push(TileJob {
                path,
                source: meta.source,
                industry: meta.industry,
                filename,
            });
        }
    }
    Ok(jobs)
}

/// Scores every job sequentially with the supplied scoring function and
/// flattens the successes.
///
/// Generic over the scorer and its error type so tests can substitute a
/// fake, and so input errors (an unreadable tile file) surface with their
/// own context instead of being disguised as model failures. A scorer error
/// drops that tile; the remaining tiles are still processed. The pacing
/// delay is applied after every tile, successful or not, independently of
/// any retry backoff inside the scorer.
pub(crate) async fn audit_tiles<F, Fut, E>(
    contract: ContractVersion,
    jobs: &[TileJob],
    pacing_secs: u64,
    mut score: F,
) -> (Vec<ReportRow>, usize)
where
    F: FnMut(TileJob) -> Fut,
    Fut: Future<Output = Result<AuditResult, E>>,
    E: std::fmt::Display,
{
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (i, job) in jobs.iter().enumerate() {
        println!("[{}/{}] auditing {}", i + 1, jobs.len(), job.filename);

        match score(job.clone()).await {
            Ok(audit) => {
                rows.push(flatten_result(
                    contract,
                    &job.source,
                    &job.industry,
                    &job.filename,
                    &audit,
                ));
            }
            Err(e) => {
                dropped += 1;
                tracing::warn!(tile = %job.filename, error = %e, "dropping tile");
            }
        }

        if pacing_secs > 0 {
            tokio::time::sleep(Duration::from_secs(pacing_secs)).await;
        }
    }

    (rows, dropped)
}

#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_audit(
    config: &AppConfig,
    contract: ContractVersion,
    slices_root: &Path,
    report_path: &Path,
    limit: usize,
    seed: Option<u64>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let jobs = collect_tiles(slices_root, limit, seed)?;
    if jobs.is_empty() {
        anyhow::bail!("no sliced tiles found in {}", slices_root.display());
    }

    if dry_run {
        println!("dry-run: would audit {} tiles with {contract:?}:", jobs.len());
        for job in &jobs {
            println!("  {}", job.filename);
        }
        return Ok(());
    }

    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;
    let client = GeminiClient::new(api_key, &config.model_name, config.request_timeout_secs)?;

    let max_retries = config.max_retries;
    let backoff_base = config.retry_backoff_base_secs;
    let client_ref = &client;

    let (rows, dropped) = audit_tiles(contract, &jobs, config.inter_request_delay_secs, |job| {
        async move {
            let png_bytes = std::fs::read(&job.path)
                .with_context(|| format!("could not read tile {}", job.path.display()))?;
            let prompt = build_prompt(contract, &job.industry);
            let raw = retry_with_backoff(max_retries, backoff_base, || {
                client_ref.score_tile(&prompt, &png_bytes)
            })
            .await?;
            let audit = parse_audit(contract, raw)?;
            anyhow::Ok(audit)
        }
    })
    .await;

    match write_report(report_path, contract, &rows) {
        Ok(written) => {
            println!(
                "audited {written} tiles ({dropped} dropped); report written to {}",
                report_path.display()
            );
            Ok(())
        }
        Err(logoaudit_report::ReportError::NoRows) => {
            anyhow::bail!("no data: every tile was dropped, nothing written")
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;
    use logoaudit_model::{CategoryDetail, CategoryResult, ModelError};

    fn fake_jobs(n: usize) -> Vec<TileJob> {
        (1..=n)
            .map(|i| TileJob {
                path: PathBuf::from(format!("hue_coffee_{i:02}.png")),
                source: "hue".to_string(),
                industry: "coffee".to_string(),
                filename: format!("hue_coffee_{i:02}.png"),
            })
            .collect()
    }

    fn full_audit(contract: ContractVersion) -> AuditResult {
        AuditResult {
            categories: contract
                .categories()
                .iter()
                .map(|c| {
                    (
                        *c,
                        Some(CategoryResult {
                            score: Some(3),
                            reason: "ok".to_string(),
                            detail: CategoryDetail::Fix("None".to_string()),
                        }),
                    )
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn one_failing_tile_does_not_abort_the_batch() {
        let contract = ContractVersion::Product;
        let jobs = fake_jobs(10);

        let (rows, dropped) = audit_tiles(contract, &jobs, 0, |job| async move {
            if job.filename.ends_with("05.png") {
                Err(ModelError::Malformed {
                    context: job.filename,
                    reason: "glitch".to_string(),
                })
            } else {
                Ok(full_audit(contract))
            }
        })
        .await;

        assert_eq!(rows.len(), 9);
        assert_eq!(dropped, 1);
        // Tiles after the failure are still present.
        assert!(rows.iter().any(|r| r.filename == "hue_coffee_10.png"));
        assert!(!rows.iter().any(|r| r.filename == "hue_coffee_05.png"));
    }

    #[tokio::test]
    async fn all_tiles_failing_yields_no_rows() {
        let contract = ContractVersion::BugHunt;
        let jobs = fake_jobs(3);

        let (rows, dropped) = audit_tiles(contract, &jobs, 0, |job| async move {
            Err(ModelError::Malformed {
                context: job.filename,
                reason: "glitch".to_string(),
            })
        })
        .await;

        assert!(rows.is_empty());
        assert_eq!(dropped, 3);
    }

    #[tokio::test]
    async fn unreadable_tile_is_dropped_with_read_context() {
        let contract = ContractVersion::Product;
        let dir = tempfile::tempdir().unwrap();
        let readable = dir.path().join("hue_coffee_01.png");
        std::fs::write(&readable, b"png").unwrap();
        let jobs = vec![
            TileJob {
                path: readable,
                source: "hue".to_string(),
                industry: "coffee".to_string(),
                filename: "hue_coffee_01.png".to_string(),
            },
            TileJob {
                path: dir.path().join("hue_coffee_02.png"),
                source: "hue".to_string(),
                industry: "coffee".to_string(),
                filename: "hue_coffee_02.png".to_string(),
            },
        ];

        let mut errors = Vec::new();
        let (rows, dropped) = audit_tiles(contract, &jobs, 0, |job| {
            let result = std::fs::read(&job.path)
                .map(|_| full_audit(contract))
                .with_context(|| format!("could not read tile {}", job.path.display()));
            if let Err(e) = &result {
                errors.push(format!("{e:#}"));
            }
            async move { result }
        })
        .await;

        assert_eq!(rows.len(), 1);
        assert_eq!(dropped, 1);
        // The failure carries file-read context, not a model-contract error.
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("could not read tile"));
        assert!(errors[0].contains("hue_coffee_02.png"));
    }

    #[test]
    fn collect_tiles_reads_batch_directories() {
        let dir = tempfile::tempdir().unwrap();
        let batch = dir.path().join("hue_coffee");
        std::fs::create_dir(&batch).unwrap();
        for i in 1..=4 {
            std::fs::write(batch.join(format!("hue_coffee_{i:02}.png")), b"png").unwrap();
        }

        let jobs = collect_tiles(dir.path(), 0, None).unwrap();
        assert_eq!(jobs.len(), 4);
        assert!(jobs.iter().all(|j| j.source == "hue" && j.industry == "coffee"));
    }

    #[test]
    fn collect_tiles_applies_per_batch_cap() {
        let dir = tempfile::tempdir().unwrap();
        for batch_name in ["hue_coffee", "looka_spa"] {
            let batch = dir.path().join(batch_name);
            std::fs::create_dir(&batch).unwrap();
            for i in 1..=10 {
                std::fs::write(batch.join(format!("{batch_name}_{i:02}.png")), b"png").unwrap();
            }
        }

        let jobs = collect_tiles(dir.path(), 3, Some(7)).unwrap();
        assert_eq!(jobs.len(), 6, "three tiles per batch");
        assert_eq!(jobs.iter().filter(|j| j.source == "hue").count(), 3);
    }

    #[test]
    fn collect_tiles_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_tiles(&dir.path().join("nope"), 0, None).is_err());
    }
}
