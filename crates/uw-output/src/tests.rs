//! Tests for uw-output.

#[cfg(test)]
mod helpers {
    use uw_core::Protocol;
    use uw_sim::EnergyReading;

    pub fn reading(timestamp_secs: f64, avg: f64, max: f64) -> EnergyReading {
        EnergyReading {
            timestamp_secs,
            avg_energy: avg,
            max_energy: max,
            node_count: 5,
            protocol:   Protocol::Hhvbf,
        }
    }

    pub fn rows_of(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_reader(bytes);
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{reading, rows_of};
    use crate::csv::{CsvWriter, HEADER};
    use crate::writer::OutputWriter;

    #[test]
    fn header_only_when_empty() {
        let w = CsvWriter::from_writer(Vec::new()).unwrap();
        let (headers, rows) = rows_of(&w.into_inner().unwrap());
        assert_eq!(headers, HEADER);
        assert!(rows.is_empty());
    }

    #[test]
    fn values_rounded_per_column() {
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.write_reading(&reading(0.2, 0.0712, 0.1149)).unwrap();
        w.write_reading(&reading(12.0, 3.456, 10.0)).unwrap();
        assert_eq!(w.rows(), 2);
        let (_, rows) = rows_of(&w.into_inner().unwrap());
        assert_eq!(rows[0], ["0.2", "0.07", "0.11", "5", "HHVBF"]);
        assert_eq!(rows[1], ["12.0", "3.46", "10.00", "5", "HHVBF"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("r.csv");
        let mut w = CsvWriter::create(&path).unwrap();
        w.write_reading(&reading(0.2, 1.0, 2.0)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}

// ── export_readings ───────────────────────────────────────────────────────────

#[cfg(test)]
mod export_tests {
    use uw_core::Protocol;

    use super::helpers::reading;
    use crate::{ExportOutcome, export_file_name, export_readings};

    #[test]
    fn file_name_format() {
        assert_eq!(
            export_file_name(Protocol::Eedbr, 1_700_000_000_123),
            "uwsn_energy_EEDBR_1700000000123.csv"
        );
    }

    #[test]
    fn empty_series_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let outcome = export_readings(dir.path(), Protocol::Vbf, &[]).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_every_reading() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let readings: Vec<_> = (1..=4).map(|i| reading(0.2 * i as f64, i as f64, 2.0 * i as f64)).collect();

        let ExportOutcome::Written(path) = export_readings(dir.path(), Protocol::Dbr, &readings).unwrap()
        else {
            panic!("expected a file");
        };
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("uwsn_energy_DBR_"), "{name}");
        assert!(name.ends_with(".csv"));
        assert_eq!(path.parent(), Some(dir.path()));

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let stamps: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(stamps, ["0.2", "0.4", "0.6", "0.8"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("nope");
        assert!(export_readings(&missing, Protocol::Olsr, &[reading(0.2, 0.0, 0.0)]).is_err());
    }
}

// ── ReadingsObserver ──────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use uw_core::{Protocol, SimConfig};
    use uw_sim::{EnergyReading, SimBuilder};

    use super::helpers::rows_of;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, ReadingsObserver};

    struct Broken;

    impl OutputWriter for Broken {
        fn write_reading(&mut self, _reading: &EnergyReading) -> OutputResult<()> {
            Err(io::Error::other("disk full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn streams_readings_during_run() {
        let cfg = SimConfig { duration_secs: 1.0, protocol: Protocol::Olsr, ..SimConfig::default() };
        let mut sim = SimBuilder::from_config(cfg).build().unwrap();
        let mut obs = ReadingsObserver::new(CsvWriter::from_writer(Vec::new()).unwrap());
        sim.run(&mut obs).unwrap();

        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), 5);
        let (_, rows) = rows_of(&obs.into_writer().into_inner().unwrap());
        assert_eq!(rows.len(), sim.readings().len());
        for (row, r) in rows.iter().zip(sim.readings()) {
            assert_eq!(row[0], format!("{:.1}", r.timestamp_secs));
            assert_eq!(row[1], format!("{:.2}", r.avg_energy));
            assert_eq!(row[4], "OLSR");
        }
    }

    #[test]
    fn keeps_first_error() {
        let cfg = SimConfig { duration_secs: 1.0, ..SimConfig::default() };
        let mut sim = SimBuilder::from_config(cfg).build().unwrap();
        let mut obs = ReadingsObserver::new(Broken);
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}
