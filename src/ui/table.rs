use tabled::{settings::Style, Table, Tabled};

use crate::pictogram::PictogramRecord;

#[derive(Tabled)]
pub struct PictogramRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Locale")]
    pub locale: String,
    #[tabled(rename = "Image")]
    pub image: String,
    #[tabled(rename = "Sound")]
    pub sound: String,
    #[tabled(rename = "Children")]
    pub children: usize,
}

impl PictogramRow {
    pub fn new(record: &PictogramRecord, name: String, children: usize) -> Self {
        Self {
            id: record.id.clone(),
            name,
            locale: if record.locale.is_empty() { "-".to_string() } else { record.locale.clone() },
            image: record.image.clone(),
            sound: record.sound.clone(),
            children,
        }
    }
}

pub fn pictogram_table(rows: &[PictogramRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_rows() {
        let record = PictogramRecord::new("dog", "", "perro", "dog.png", "dog.mp3");
        let table = pictogram_table(&[PictogramRow::new(&record, "PERRO".to_string(), 0)]);
        assert!(table.contains("PERRO"));
        assert!(table.contains("dog.png"));
        assert!(pictogram_table(&[]).is_empty());
    }
}
