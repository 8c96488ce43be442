//! Line-oriented encoding of finance records.
//!
//! One record per line, comma separated, quoted only when a field contains a
//! delimiter, quote or line break.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use showbiz_core::{
    storage::{DateFormat, LoadMode, LoadReport, RecordLayout},
    CoreError,
};
use showbiz_domain::{Category, FinanceRecord, RecordDraft, RecordKind};

/// Settings shared by the writer and the reader of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    pub date_format: DateFormat,
    pub layout: RecordLayout,
    pub include_header: bool,
    pub load_mode: LoadMode,
}

impl CodecOptions {
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
        self.load_mode = load_mode;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordCodec {
    options: CodecOptions,
}

impl RecordCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Canonical field values of `record` in layout order.
    pub fn fields(&self, record: &FinanceRecord) -> Vec<String> {
        let mut fields = vec![
            record.kind().to_string(),
            record.amount().to_string(),
            record.description().to_string(),
            self.options.date_format.format(record.date()),
        ];
        if self.options.layout == RecordLayout::Full {
            fields.push(record.category().to_string());
        }
        fields
    }

    pub fn encode<W: std::io::Write>(
        &self,
        out: W,
        records: &[FinanceRecord],
    ) -> Result<(), CoreError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(out);
        if self.options.include_header {
            writer
                .write_record(self.options.layout.columns())
                .map_err(csv_error)?;
        }
        for record in records {
            writer.write_record(self.fields(record)).map_err(csv_error)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn encode_to_string(&self, records: &[FinanceRecord]) -> Result<String, CoreError> {
        let mut buffer = Vec::new();
        self.encode(&mut buffer, records)?;
        String::from_utf8(buffer).map_err(|err| CoreError::Storage(err.to_string()))
    }

    /// Parses every line of `input`. Strict mode stops at the first bad line.
    pub fn decode<R: std::io::Read>(&self, input: R, today: NaiveDate) -> Result<LoadReport, CoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut report = LoadReport::default();
        let mut row = StringRecord::new();
        let mut expect_header = self.options.include_header;

        loop {
            let line = reader.position().line() as usize;
            let parsed = match reader.read_record(&mut row) {
                Ok(false) => break,
                Ok(true) => {
                    // Reported position is the start of the record just read.
                    let line = row.position().map(|p| p.line() as usize).unwrap_or(line);
                    if std::mem::take(&mut expect_header) {
                        self.check_header(&row, line)?;
                        continue;
                    }
                    self.parse_row(&row, today)
                        .map_err(|reason| CoreError::MalformedRecordLine { line, reason })
                }
                Err(err) if err.is_io_error() => return Err(csv_error(err)),
                Err(err) => Err(CoreError::MalformedRecordLine {
                    line: err.position().map(|p| p.line() as usize).unwrap_or(line),
                    reason: err.to_string(),
                }),
            };

            match parsed {
                Ok(record) => report.records.push(record),
                Err(err) if self.options.load_mode == LoadMode::Lenient => {
                    tracing::warn!(error = %err, "skipping malformed record");
                    report.skipped += 1;
                }
                Err(err) => {
                    tracing::error!(error = %err, "aborting load");
                    return Err(err);
                }
            }
        }
        Ok(report)
    }

    fn check_header(&self, row: &StringRecord, line: usize) -> Result<(), CoreError> {
        let expected = self.options.layout.columns();
        let matches = row.len() == expected.len()
            && row
                .iter()
                .zip(expected)
                .all(|(found, wanted)| found.trim().eq_ignore_ascii_case(wanted));
        if matches {
            Ok(())
        } else {
            Err(CoreError::MalformedRecordLine {
                line,
                reason: format!("expected header `{}`", expected.join(",")),
            })
        }
    }

    fn parse_row(&self, row: &StringRecord, today: NaiveDate) -> Result<FinanceRecord, String> {
        let expected = self.options.layout.columns().len();
        if row.len() != expected {
            return Err(format!("expected {expected} fields, found {}", row.len()));
        }
        let field = |idx: usize| row.get(idx).unwrap_or_default();

        let kind: RecordKind = field(0).parse().map_err(|err| format!("{err}"))?;
        let amount: f64 = field(1)
            .trim()
            .parse()
            .map_err(|_| format!("invalid amount `{}`", field(1)))?;
        let date = self.options.date_format.parse(field(3)).map_err(|_| {
            format!(
                "invalid date `{}`, expected {}",
                field(3),
                self.options.date_format.hint()
            )
        })?;
        let category = match self.options.layout {
            RecordLayout::Full => field(4)
                .parse::<Category>()
                .map_err(|err| format!("{err}"))?,
            RecordLayout::Compact => Category::fallback_for(kind),
        };

        RecordDraft {
            kind: Some(kind),
            amount,
            description: Some(field(2).to_string()),
            date: Some(date),
            category: Some(category),
        }
        .build(today)
        .map_err(|err| err.to_string())
    }
}

fn csv_error(err: csv::Error) -> CoreError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CoreError::Io(io),
            other => CoreError::Storage(format!("{other:?}")),
        }
    } else {
        CoreError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn record(description: &str) -> FinanceRecord {
        FinanceRecord::new(
            RecordKind::Income,
            1000.0,
            description,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Category::IncomeSalary,
            today(),
        )
        .unwrap()
    }

    #[test]
    fn encodes_canonical_lines() {
        let codec = RecordCodec::new(CodecOptions::default().with_header(true));
        let text = codec.encode_to_string(&[record("Salary")]).unwrap();
        assert_eq!(
            text,
            "kind,amount,description,date,category\nINCOME,1000,Salary,2025-06-01,INCOME_SALARY\n"
        );
    }

    #[test]
    fn dotted_compact_layout() {
        let codec = RecordCodec::new(
            CodecOptions::default()
                .with_date_format(DateFormat::Dotted)
                .with_layout(RecordLayout::Compact),
        );
        let text = codec.encode_to_string(&[record("Salary")]).unwrap();
        assert_eq!(text, "INCOME,1000,Salary,01.06.2025\n");

        let report = codec.decode(text.as_bytes(), today()).unwrap();
        assert_eq!(report.records[0].category(), Category::IncomeOther);
    }

    #[test]
    fn descriptions_with_delimiters_are_quoted() {
        let codec = RecordCodec::default();
        let original = record("Rent, \"main\" hall");
        let text = codec.encode_to_string(&[original.clone()]).unwrap();
        assert!(text.contains("\"Rent, \"\"main\"\" hall\""));

        let report = codec.decode(text.as_bytes(), today()).unwrap();
        assert!(report.records[0].same_entry(&original));
    }

    #[test]
    fn wrong_field_count_is_structural_error() {
        let codec = RecordCodec::default();
        let err = codec
            .decode("INCOME,10,Gift,2025-06-01\n".as_bytes(), today())
            .unwrap_err();
        match err {
            CoreError::MalformedRecordLine { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("expected 5 fields"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_java_style_amounts() {
        let codec = RecordCodec::default();
        let report = codec
            .decode(
                "EXPENSE,500.0,Hall,2025-06-01,EXPENSE_RENT\n".as_bytes(),
                today(),
            )
            .unwrap();
        assert_eq!(report.records[0].amount(), 500.0);
    }

    #[test]
    fn header_mismatch_is_rejected() {
        let codec = RecordCodec::new(CodecOptions::default().with_header(true));
        let err = codec
            .decode("INCOME,10,Gift,2025-06-01,INCOME_OTHER\n".as_bytes(), today())
            .unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecordLine { line: 1, .. }));
    }
}
