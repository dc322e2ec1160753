use ron::ser::PrettyConfig;
use serde::Serialize;
use std::io;

pub fn write_as_ron<W: io::Write, S: Serialize>(writer: W, object: S) -> Result<(), ron::Error> {
    let mut serializer =
        ron::Serializer::new(writer, Some(PrettyConfig::default().struct_names(true)))?;
    object.serialize(&mut serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::generation::GenerationStatistics;

    #[test]
    fn statistics_are_written_with_struct_name() {
        let statistics = GenerationStatistics {
            assertions: 4,
            ..GenerationStatistics::default()
        };
        let mut buf: Vec<u8> = vec![];
        write_as_ron(&mut buf, &statistics).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("GenerationStatistics("));
        let parsed: GenerationStatistics = ron::from_str(&text).unwrap();
        assert_eq!(parsed, statistics);
    }
}
