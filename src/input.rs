//! Decoding of the VPC record stream.
//!
//! Records are whitespace-separated JSON objects read until end of stream.
//! Each record is decoded through `serde_path_to_error` so a bad field is
//! reported with its JSON path.

use crate::error::MapError;
use crate::models::Vpc;
use serde_json::de::IoRead;
use serde_json::{StreamDeserializer, Value};
use std::io::Read;

/// Iterator over the VPC records of a reader.
///
/// Yields `Err` at most once; after the first error the iterator is done.
pub struct VpcReader<R: Read> {
    stream: StreamDeserializer<'static, IoRead<R>, Value>,
    record: usize,
    failed: bool,
}

impl<R: Read> VpcReader<R> {
    pub fn new(reader: R) -> VpcReader<R> {
        VpcReader {
            stream: serde_json::Deserializer::from_reader(reader).into_iter::<Value>(),
            record: 0,
            failed: false,
        }
    }

    fn decode(&mut self, next: Result<Value, serde_json::Error>) -> Result<Vpc, MapError> {
        self.record += 1;
        let value = match next {
            Ok(value) => value,
            Err(e) if e.is_io() => return Err(MapError::Input(e)),
            Err(e) => {
                return Err(MapError::MalformedRecord {
                    record: self.record,
                    path: ".".to_string(),
                    source: e,
                })
            }
        };
        serde_path_to_error::deserialize(value).map_err(|e| MapError::MalformedRecord {
            record: self.record,
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

impl<R: Read> Iterator for VpcReader<R> {
    type Item = Result<Vpc, MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.stream.next()?;
        let result = self.decode(next);
        self.failed = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Hands out `data`, then fails every read with a broken pipe.
    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_reads_concatenated_records() {
        let input = r#"
            {"Vpc":"vpc-1","Name":"a","Cidr":"10.0.0.0/24","Subnets":[]}
            {"Vpc":"vpc-2","Name":"b","Cidr":"10.1.0.0/24"}{"Vpc":"vpc-3","Cidr":"10.2.0.0/24"}
        "#;
        let vpcs: Vec<Vpc> = VpcReader::new(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(vpcs.len(), 3);
        assert_eq!(vpcs[1].name, "b");
        assert_eq!(vpcs[2].vpc, "vpc-3");
    }

    #[test]
    fn test_empty_stream_is_clean() {
        let mut reader = VpcReader::new("   \n".as_bytes());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_bad_cidr_reports_path() {
        let input = r#"{"Vpc":"vpc-1","Cidr":"10.0.0.0/24","Subnets":[{"Cidr":"10.0.0.0/40"}]}"#;
        let err = VpcReader::new(input.as_bytes()).next().unwrap().unwrap_err();
        assert!(err.is_malformed_input());
        match err {
            MapError::MalformedRecord { record, path, .. } => {
                assert_eq!(record, 1);
                assert_eq!(path, "Subnets[0].Cidr");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_stops_after_first_error() {
        let input = r#"{"Vpc":"vpc-1","Cidr":"10.0.0.0/24"} {"Vpc": oops} {"Vpc":"vpc-3","Cidr":"10.2.0.0/24"}"#;
        let mut reader = VpcReader::new(input.as_bytes());
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(err.is_malformed_input(), "{err}");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_truncated_record_is_malformed() {
        let input = r#"{"Vpc":"vpc-1","Cidr":"10.0.0.0/24","Subnets":["#;
        let err = VpcReader::new(input.as_bytes()).next().unwrap().unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_read_failure_mid_record_is_io_error() {
        let reader = FailingReader {
            data: br#"{"Vpc":"vpc-1","Cidr":"10.0.0.0/24"} {"Vpc":"vpc-2","Ci"#,
        };
        let mut vpcs = VpcReader::new(reader);
        assert_eq!(vpcs.next().unwrap().unwrap().vpc, "vpc-1");
        let err = vpcs.next().unwrap().unwrap_err();
        assert!(matches!(err, MapError::Input(_)), "{err:?}");
        assert!(err.is_io());
        assert!(!err.is_malformed_input());
        assert!(vpcs.next().is_none());
    }
}
