//! Built-in sample payload used when the host page supplies no data, e.g.
//! during standalone development.
//!
//! The records are deliberately shaped like real CMS output: one person filed
//! twice under different regions, a district-level assignment and a
//! delimiter-joined region list.

use serde_json::{json, Value};

#[must_use]
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({
            "id": 101,
            "name": "Иванов Иван Иванович",
            "position": "Региональный менеджер",
            "phone": "+7 (495) 123-45-67",
            "email": "ivanov@example.ru",
            "regionId": "RU-MOW",
            "activity": ["Лабораторное", "Служба крови"],
            "workingHours": "Пн-Пт 9:00-18:00"
        }),
        json!({
            "id": 101,
            "name": "Иванов Иван Иванович",
            "position": "Региональный менеджер",
            "phone": "+7 (495) 123-45-67",
            "email": "ivanov@example.ru",
            "regionId": "RU-MOS"
        }),
        json!({
            "id": 102,
            "name": "Петрова Анна Сергеевна",
            "position": "Руководитель направления",
            "phone": "+7 (812) 765-43-21",
            "email": "petrova@example.ru",
            "regionId": ["RU-SPE", "RU-LEN"],
            "activity": ["Эфферентные методы"]
        }),
        json!({
            "id": 103,
            "name": "Сидоров Пётр Алексеевич",
            "position": "Представитель",
            "phone": "+7 (343) 222-33-44",
            "email": "sidorov@example.ru",
            "regionId": "УФО",
            "activity": ["Госпитальное"]
        }),
        json!({
            "id": 104,
            "name": "Кузнецова Мария Олеговна",
            "position": "Менеджер по продажам",
            "phone": "+7 (383) 555-66-77",
            "email": "kuznetsova@example.ru",
            "regionId": "RU-NVS; RU-TOM\nRU-OMS",
            "activity": ["Лабораторное"]
        }),
        json!({
            "id": 105,
            "name": "Смирнов Алексей Викторович",
            "position": "",
            "phone": "+7 (861) 200-10-10",
            "email": "smirnov@example.ru",
            "regionId": "ЮФО",
            "address": "г. Краснодар, ул. Красная, 1"
        }),
        json!({
            "id": 106,
            "name": "Ахметова Гульнара Рашитовна",
            "position": "Региональный представитель",
            "phone": "+7 (843) 300-20-10",
            "email": "akhmetova@example.ru",
            "regionId": "RU-TA,RU-BA,RU-UD",
            "activity": ["Служба крови", "Госпитальное"]
        }),
        json!({
            "id": 107,
            "name": "Ким Сергей Владимирович",
            "position": "Менеджер",
            "phone": "+7 (423) 240-00-00",
            "email": "kim@example.ru",
            "regionId": "ДФО",
            "workingHours": "Пн-Пт 10:00-19:00 (МСК+7)"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::registry::RegionRegistry;

    #[test]
    fn sample_normalizes_cleanly() {
        let report = normalize(&sample_records(), RegionRegistry::russia());
        assert_eq!(report.dropped_count(), 0);
        assert!(report.unknown_codes.is_empty());
        assert_eq!(report.representatives.len(), 7);
    }

    #[test]
    fn sample_merges_duplicate_person() {
        let report = normalize(&sample_records(), RegionRegistry::russia());
        let ivanov = &report.representatives[0];
        assert_eq!(ivanov.id, 101);
        assert!(ivanov.region_id.contains("RU-MOW"));
        assert!(ivanov.region_id.contains("RU-MOS"));
    }
}
