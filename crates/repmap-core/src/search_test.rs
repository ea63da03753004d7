use super::*;
use crate::representatives::RegionAssignment;

fn rep(id: i64, name: &str, codes: &[&str]) -> Representative {
    Representative {
        id,
        name: name.to_string(),
        position: "Менеджер".to_string(),
        phone: format!("+7 900 000-00-0{id}"),
        email: format!("user{id}@Example.RU"),
        region_id: RegionAssignment::from_codes(codes.iter().map(|c| (*c).to_string())),
        activity: None,
        working_hours: None,
        address: None,
    }
}

fn registry() -> &'static RegionRegistry {
    RegionRegistry::russia()
}

fn ids(reps: &[&Representative]) -> Vec<i64> {
    reps.iter().map(|r| r.id).collect()
}

fn sample() -> Vec<Representative> {
    let mut with_activity = rep(4, "Сидоров", &["RU-SVE"]);
    with_activity.activity = Some(vec!["Служба крови".to_string()]);
    vec![
        rep(1, "Соколова Анна", &["RU-MOW"]),
        rep(2, "Петров Пётр", &["ЦФО"]),
        rep(3, "Smith", &["RU-SPE", "RU-LEN"]),
        with_activity,
        rep(5, "Кузнецов", &["XX-999"]),
        rep(6, "Орлов", &["ПФО"]),
    ]
}

#[test]
fn blank_query_is_identity() {
    let reps = sample();
    for query in ["", "   ", "\n\t"] {
        let found = search(&reps, query, registry());
        assert_eq!(found.len(), reps.len());
        assert!(found.iter().zip(&reps).all(|(a, b)| std::ptr::eq(*a, b)));
    }
}

#[test]
fn name_match_is_case_insensitive() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "соколов", registry())), vec![1]);
    assert_eq!(ids(&search(&reps, "SMITH", registry())), vec![3]);
}

#[test]
fn query_is_trimmed() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "  соколова  ", registry())), vec![1]);
}

#[test]
fn email_match_is_case_insensitive() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "user3@example", registry())), vec![3]);
}

#[test]
fn phone_match_is_raw_substring() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "000-00-05", registry())), vec![5]);
}

#[test]
fn region_name_match() {
    let reps = sample();
    // Москва: rep 1 directly; rep 2 via its district's member regions.
    assert_eq!(ids(&search(&reps, "москва", registry())), vec![1, 2]);
}

#[test]
fn district_name_and_abbreviation_match_region_assigned_reps() {
    let reps = sample();
    assert_eq!(
        ids(&search(&reps, "северо-западный", registry())),
        vec![3]
    );
    assert_eq!(ids(&search(&reps, "сзфо", registry())), vec![3]);
}

#[test]
fn district_assigned_rep_matches_member_region_name() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "татарстан", registry())), vec![6]);
}

#[test]
fn district_assigned_rep_matches_own_abbreviation() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "пфо", registry())), vec![6]);
}

#[test]
fn activity_tag_match() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "служба", registry())), vec![4]);
}

#[test]
fn city_alias_matches_region_assignment() {
    let reps = sample();
    // Свердловская область does not contain the city name.
    assert_eq!(ids(&search(&reps, "екатеринбург", registry())), vec![4]);
}

#[test]
fn city_alias_matches_district_assignment() {
    let reps = sample();
    // Казань -> RU-TA, which belongs to ПФО.
    assert_eq!(ids(&search(&reps, "казань", registry())), vec![6]);
}

#[test]
fn partial_city_alias_matches() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "петербу", registry())), vec![3]);
}

#[test]
fn unknown_code_rep_reachable_by_name_only() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "кузнецов", registry())), vec![5]);
    assert_eq!(ids(&search(&reps, "xx-999", registry())), Vec::<i64>::new());
}

#[test]
fn no_match_returns_empty() {
    let reps = sample();
    assert!(search(&reps, "zzzz", registry()).is_empty());
}

#[test]
fn results_keep_input_order() {
    let reps = sample();
    assert_eq!(ids(&search(&reps, "фо", registry())), vec![1, 2, 3, 4, 6]);
}
