use crate::lineage::types::LineageAssignment;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the sample/lineage association as a two-column TSV, sorted by
/// sample id so repeated runs produce identical files.
pub fn write_label_table(path: &Path, assignment: &LineageAssignment) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create label table {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "sample\tlineage")?;
    let mut rows: Vec<(&String, &String)> = assignment.leaf_labels.iter().collect();
    rows.sort();
    for (sample, lineage) in rows {
        writeln!(writer, "{}\t{}", sample, lineage)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_tab_separated() {
        let mut assignment = LineageAssignment::default();
        assignment.leaf_labels.insert("s2".into(), "A.1".into());
        assignment.leaf_labels.insert("s1".into(), "A.0".into());
        assignment.leaf_labels.insert("s3".into(), "B".into());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.tsv");
        write_label_table(&path, &assignment).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "sample\tlineage\ns1\tA.0\ns2\tA.1\ns3\tB\n");
    }
}
