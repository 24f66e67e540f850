use chrono::{NaiveDate, Utc};
use heapless::String as HeaplessString;
use staffing_core_db::models::candidate::{CandidateRecord, NewCandidateModel};

pub fn new_candidate(last_name: &str, first_name: &str) -> NewCandidateModel {
    let now = Utc::now();
    NewCandidateModel {
        record: CandidateRecord {
            last_name: HeaplessString::try_from(last_name).unwrap(),
            first_name: HeaplessString::try_from(first_name).unwrap(),
            email: None,
            phone: Some(HeaplessString::try_from("0601020304").unwrap()),
            vehicle_owner: true,
            active: true,
            sectors: vec!["cuisine".to_string(), "salle".to_string()],
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
            updated_at: now,
        },
        created_at: now,
    }
}
