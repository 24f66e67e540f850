use chrono::Utc;
use heapless::String as HeaplessString;
use staffing_core_api::domain::ReferenceCategory;
use staffing_core_db::models::settings::{
    NewOperatorAccountModel, NewReferenceEntryModel, OperatorAccountRecord, ReferenceEntryRecord,
};

pub fn new_reference_entry(category: ReferenceCategory, value: &str) -> NewReferenceEntryModel {
    let now = Utc::now();
    NewReferenceEntryModel {
        category,
        record: ReferenceEntryRecord {
            value: HeaplessString::try_from(value).unwrap(),
            description: None,
            updated_at: now,
        },
        created_at: now,
    }
}

pub fn new_operator(last_name: &str, email: &str) -> NewOperatorAccountModel {
    let now = Utc::now();
    NewOperatorAccountModel {
        record: OperatorAccountRecord {
            first_name: HeaplessString::try_from("Camille").unwrap(),
            last_name: HeaplessString::try_from(last_name).unwrap(),
            email: HeaplessString::try_from(email).unwrap(),
            active: true,
            updated_at: now,
        },
        created_at: now,
    }
}
