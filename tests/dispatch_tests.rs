use tallysort::prelude::*;

fn sample_set() -> RecordSet {
    let mut set = RecordSet::new();
    for (name, category, priority) in [
        ("Zeta", "core", 5u8),
        ("Alpha", "support", 9),
        ("Mu", "core", 2),
    ] {
        set.push(Record::new(name, category, priority)).unwrap();
    }
    set
}

#[test]
fn test_sort_then_search_finds_record() {
    let mut organizer = Dispatcher::new(sample_set());

    let outcome = organizer.dispatch(Request::SortByName).unwrap();
    let Outcome::Sorted(report) = outcome else {
        panic!("expected a sort report, got {outcome:?}");
    };
    assert_eq!(report.algorithm, "bubble sort");
    assert_eq!(report.comparisons, 3);
    assert_eq!(organizer.state(), SortState::ByName);

    let found = organizer
        .dispatch(Request::SearchByName("Mu".into()))
        .unwrap();
    assert_eq!(found, Outcome::Found { index: 1 });
    assert_eq!(organizer.working()[1].name, "Mu");

    let missing = organizer
        .dispatch(Request::SearchByName("Omega".into()))
        .unwrap();
    assert_eq!(missing, Outcome::NotFound);
}

#[test]
fn test_search_rejected_unless_sorted_by_name() {
    let mut organizer = Dispatcher::new(sample_set());

    // Fresh dispatcher: nothing sorted yet.
    assert_eq!(
        organizer.dispatch(Request::SearchByName("Mu".into())),
        Err(EngineError::SearchNotSorted)
    );

    // A sort on any other field disables search too.
    for request in [Request::SortByCategory, Request::SortByPriority] {
        organizer.dispatch(request).unwrap();
        assert!(!organizer.state().searchable());
        assert_eq!(
            organizer.dispatch(Request::SearchByName("Mu".into())),
            Err(EngineError::SearchNotSorted)
        );
    }

    // Name sort re-enables it.
    organizer.dispatch(Request::SortByName).unwrap();
    assert!(organizer.state().searchable());
    assert!(
        organizer
            .dispatch(Request::SearchByName("Mu".into()))
            .is_ok()
    );
}

#[test]
fn test_each_sort_starts_from_the_original_order() {
    // Two records sharing a category, registered in an order that a name sort
    // reverses. Insertion sort is stable, so the pair's final order reveals
    // whether the cycle started from the original or from the prior result.
    let mut set = RecordSet::new();
    set.push(Record::new("b-late", "shared", 1)).unwrap();
    set.push(Record::new("a-early", "shared", 2)).unwrap();

    let mut organizer = Dispatcher::new(set);

    organizer.dispatch(Request::SortByName).unwrap();
    assert_eq!(organizer.working()[0].name, "a-early");

    organizer.dispatch(Request::SortByCategory).unwrap();
    let names: Vec<&str> = organizer.working().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["b-late", "a-early"],
        "category sort must start from registration order, not the name-sorted copy"
    );
    assert_eq!(organizer.state(), SortState::ByCategory);
}

#[test]
fn test_original_is_never_mutated() {
    let mut organizer = Dispatcher::new(sample_set());
    let registered: Vec<Record> = organizer.original().to_vec();

    for request in [
        Request::SortByName,
        Request::SearchByName("Mu".into()),
        Request::SortByPriority,
        Request::SortByCategory,
        Request::ShowOriginal,
        Request::SortByName,
        Request::Exit,
    ] {
        let _ = organizer.dispatch(request);
        assert_eq!(organizer.original(), registered.as_slice());
    }
}

#[test]
fn test_show_original_keeps_cycle_state() {
    let mut organizer = Dispatcher::new(sample_set());

    organizer.dispatch(Request::SortByName).unwrap();
    let sorted: Vec<Record> = organizer.working().to_vec();

    assert_eq!(
        organizer.dispatch(Request::ShowOriginal).unwrap(),
        Outcome::Original
    );
    // Displaying the original neither refreshes the copy nor drops the state.
    assert_eq!(organizer.working(), sorted.as_slice());
    assert_eq!(organizer.state(), SortState::ByName);
}

#[test]
fn test_empty_set_operations_are_no_ops() {
    let mut organizer = Dispatcher::new(RecordSet::new());

    for request in [
        Request::SortByName,
        Request::SortByCategory,
        Request::SortByPriority,
        Request::SearchByName("Mu".into()),
    ] {
        assert_eq!(organizer.dispatch(request).unwrap(), Outcome::NothingToDo);
    }

    assert_eq!(
        organizer.dispatch(Request::ShowOriginal).unwrap(),
        Outcome::Original
    );
    assert!(organizer.original().is_empty());
    assert_eq!(organizer.dispatch(Request::Exit).unwrap(), Outcome::Exit);
}

#[test]
fn test_capacity_is_enforced() {
    let mut set = RecordSet::with_capacity(2);
    set.push(Record::new("a", "x", 1)).unwrap();
    set.push(Record::new("b", "y", 2)).unwrap();

    let err = set.push(Record::new("c", "z", 3)).unwrap_err();
    assert_eq!(err, EngineError::CapacityExceeded(2));
    assert_eq!(set.len(), 2);

    // Default capacity matches the advertised bound.
    let set = RecordSet::new();
    assert_eq!(set.capacity(), MAX_RECORDS);
    assert!(set.is_empty());
}

#[test]
fn test_priority_sort_report_via_dispatcher() {
    let mut organizer = Dispatcher::new(sample_set());

    let outcome = organizer.dispatch(Request::SortByPriority).unwrap();
    let Outcome::Sorted(report) = outcome else {
        panic!("expected a sort report, got {outcome:?}");
    };

    assert_eq!(report.algorithm, "selection sort");
    assert_eq!(report.criterion, "priority (descending)");
    assert_eq!(report.comparisons, 3);

    let priorities: Vec<u8> = organizer.working().iter().map(|r| r.priority).collect();
    assert_eq!(priorities, vec![9, 5, 2]);
}
