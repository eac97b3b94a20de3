//! `idgen generate`: one batch, printed to a writer.

use crate::config::GenerateArgs;
use anyhow::Context;
use ssid::SsidGenerator;
use std::{io::Write, time::Instant};
use tracing::info;

/// Generates `args.count` IDs and writes each on its own line.
///
/// If the batch stops early, the IDs produced before the failure are still
/// written before the error is returned.
pub fn run(args: &GenerateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = args.config();
    if args.generator_rand {
        info!("Random generator ID: {}", config.generator_id);
    }

    let generator = SsidGenerator::new(&config).context("invalid generator configuration")?;
    info!("Configuration: {:?}", config.resolve());

    let start = Instant::now();
    let result = generator.try_next_ids(usize::from(args.count));
    let elapsed = start.elapsed();

    let (ids, failure) = match result {
        Ok(ids) => (ids, None),
        Err(err) => {
            let (ids, source) = err.into_parts();
            (ids, Some(source))
        }
    };

    for id in &ids {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    info!("Total generation time: {:?}", elapsed);

    match failure {
        None => Ok(()),
        Some(source) => Err(anyhow::Error::new(source)
            .context(format!("generated {} of {} IDs", ids.len(), args.count))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssid::Ssid;

    fn args(count: u16, generator: u16) -> GenerateArgs {
        GenerateArgs {
            count,
            generator,
            generator_rand: false,
        }
    }

    fn output_ids(out: &[u8]) -> Vec<Ssid> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| Ssid::from_raw(line.parse().unwrap()))
            .collect()
    }

    #[test]
    fn prints_one_id_per_line() {
        let mut out = Vec::new();
        run(&args(5, 3), &mut out).unwrap();

        let ids = output_ids(&out);
        assert_eq!(ids.len(), 5);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ids.iter().all(|id| id.generator_id() == 3));
    }

    #[test]
    fn default_count_is_single_id() {
        let mut out = Vec::new();
        run(&args(1, 0), &mut out).unwrap();
        assert_eq!(output_ids(&out).len(), 1);
    }

    #[test]
    fn oversized_batch_prints_nothing() {
        let mut out = Vec::new();
        let err = run(&args(40_000, 0), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<ssid::Error>(),
            Some(ssid::Error::SequenceLimitExceeded { requested: 40_000 })
        ));
    }

    #[test]
    fn invalid_generator_is_reported() {
        let mut out = Vec::new();
        let err = run(&args(1, 256), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert_eq!(
            err.downcast_ref::<ssid::Error>(),
            Some(&ssid::Error::InvalidGeneratorId { generator_id: 256 })
        );
    }

    #[test]
    fn random_generator_is_used() {
        let mut out = Vec::new();
        let random = GenerateArgs {
            count: 2,
            generator: 0,
            generator_rand: true,
        };
        run(&random, &mut out).unwrap();

        let ids = output_ids(&out);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].generator_id(), ids[1].generator_id());
    }
}
