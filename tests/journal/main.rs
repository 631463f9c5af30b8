#[path = "../support/mod.rs"]
mod support;

use stateful_registry::{
    events, Dabbawala, DeliveryRules, DeliveryStatus, Election, ElectionRules, EventRecord,
    FestivalPlanner, FestivalRules, RegistryError,
};
use support::{adult, calendar_2025, date, panchayat, panchayat_candidates, ram};

// --- Journal Contents ---

#[test]
fn every_mutation_is_journaled_in_order() {
    let mut ram = ram();
    ram.add_delivery("Andheri", "Churchgate").unwrap();
    ram.add_delivery("Bandra", "CST").unwrap();
    ram.complete_delivery(1);
    ram.reset();

    let history = ram.history();
    let names: Vec<&str> = history.iter().map(|e| e.event_name.as_str()).collect();
    assert_eq!(
        names,
        vec![events::ADDED, events::ADDED, events::ADVANCED, events::RESET]
    );
    let sequences: Vec<u64> = history.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4]);
}

#[test]
fn rejected_operations_are_not_journaled() {
    let mut ram = ram();
    ram.add_delivery("Andheri", "Churchgate").unwrap();
    let _ = ram.add_delivery("", "");
    ram.complete_delivery(1);
    ram.complete_delivery(1);
    ram.complete_delivery(42);

    assert_eq!(ram.history().len(), 2);
}

#[test]
fn history_is_a_copy() {
    let mut ram = ram();
    ram.add_delivery("Andheri", "Churchgate").unwrap();

    let mut history = ram.history();
    history.clear();

    assert_eq!(ram.history().len(), 1);
}

// --- Restore ---

#[test]
fn dabbawala_restores_from_history() {
    let mut original = ram();
    original.add_delivery("Andheri", "Churchgate").unwrap();
    original.add_delivery("Bandra", "CST").unwrap();
    original.complete_delivery(2);

    let mut restored =
        Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), original.history()).unwrap();

    assert_eq!(restored.stats(), original.stats());
    assert_eq!(restored.active_deliveries(), original.active_deliveries());
    assert_eq!(restored.history(), original.history());

    // Counter continues where the original left off.
    assert_eq!(restored.add_delivery("Dadar", "Parel"), Ok(3));
    assert!(!restored.complete_delivery(2));
}

#[test]
fn restore_after_reset_restarts_ids() {
    let mut original = ram();
    original.add_delivery("Andheri", "Churchgate").unwrap();
    original.reset();

    let mut restored =
        Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), original.history()).unwrap();
    assert_eq!(restored.stats().total, 0);
    assert_eq!(restored.add_delivery("Bandra", "CST"), Ok(1));
}

#[test]
fn planner_restores_from_history() {
    let mut original = calendar_2025();
    original.remove_festival("Holi");

    let restored = FestivalPlanner::restore(FestivalRules::default(), original.history()).unwrap();

    assert_eq!(restored.all(), original.all());
    assert_eq!(
        restored.upcoming(date("2025-01-01"), None),
        original.upcoming(date("2025-01-01"), None)
    );
}

#[test]
fn election_restores_from_history() {
    let mut original = panchayat();
    original.register_voter(&adult("V1")).unwrap();
    original.register_voter(&adult("V2")).unwrap();
    original.cast_vote("V1", "C3", |_| (), |_| ());

    let mut restored = Election::restore(
        panchayat_candidates(),
        ElectionRules::default(),
        original.history(),
    )
    .unwrap();

    assert_eq!(restored.winner(), original.winner());
    assert_eq!(restored.history(), original.history());
    let again = restored.cast_vote(
        "V1",
        "C1",
        |_| "success".to_string(),
        |err| err.to_string(),
    );
    assert_eq!(again, "already_voted");
    assert!(restored.cast_vote("V2", "C1", |_| true, |_| false));
}

#[test]
fn restore_rejects_corrupt_payload() {
    let history = vec![EventRecord::new(events::ADDED, vec![0xff, 0x00, 0xab], 1)];

    let result = Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), history);
    assert!(matches!(result, Err(RegistryError::Codec(_))));
}

#[test]
fn restore_rejects_advance_of_unknown_record() {
    let mut source = ram();
    source.add_delivery("Andheri", "Churchgate").unwrap();
    source.complete_delivery(1);

    // Drop the add so the advance has nothing to apply to.
    let history: Vec<EventRecord> = source.history().into_iter().skip(1).collect();

    let result = Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), history);
    assert!(matches!(result, Err(RegistryError::Replay(_))));
}

// --- Export ---

#[test]
fn history_round_trips_through_json() {
    let mut original = ram();
    original.add_delivery("Andheri", "Churchgate").unwrap();
    original.complete_delivery(1);

    let json = serde_json::to_string(&original.history()).unwrap();
    let imported: Vec<EventRecord> = serde_json::from_str(&json).unwrap();

    let restored = Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), imported).unwrap();
    let deliveries = restored.active_deliveries();
    assert!(deliveries.is_empty());
    assert_eq!(restored.stats().completed, 1);
}

#[test]
fn exported_payload_is_base64_text() {
    let mut original = ram();
    original.add_delivery("Andheri", "Churchgate").unwrap();

    let value = serde_json::to_value(original.history()).unwrap();
    let payload = &value[0]["payload"];
    assert!(payload.is_string());
    assert_eq!(value[0]["event_name"], "Added");
    assert_eq!(value[0]["sequence"], 1);
}

#[test]
fn restored_delivery_keeps_its_status() {
    let mut original = ram();
    original.add_delivery("Andheri", "Churchgate").unwrap();
    original.add_delivery("Bandra", "CST").unwrap();
    original.complete_delivery(1);

    let restored =
        Dabbawala::restore("Ram", "Dadar", DeliveryRules::default(), original.history()).unwrap();
    let active = restored.active_deliveries();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, 2);
    assert_eq!(active[0].status, DeliveryStatus::Pending);
}
