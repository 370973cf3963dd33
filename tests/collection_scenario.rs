use kegtrack::prelude::*;

fn downtown_bar() -> StaticDirectory {
    StaticDirectory::new(vec![
        Outlet::new("2", "Downtown Bar", "456 Oak Ave").with_eligible(["KEG004", "KEG005"]),
    ])
    .unwrap()
}

#[test]
fn downtown_bar_pickup_end_to_end() {
    let mut wf = Workflow::collection(downtown_bar(), ManualScanner::new());
    wf.select_outlet(&OutletId::new("2")).unwrap();

    wf.begin_scan().unwrap();
    assert!(wf.submit_scan("KEG004").unwrap().is_accepted());

    wf.begin_scan().unwrap();
    assert_eq!(
        wf.submit_scan("KEG004").unwrap(),
        ScanOutcome::Rejected {
            reason: Rejection::DuplicateScan,
            code: KegCode::new("KEG004"),
        }
    );

    wf.begin_scan().unwrap();
    assert_eq!(
        wf.submit_scan("KEG099").unwrap(),
        ScanOutcome::Rejected {
            reason: Rejection::NotOwnedByOutlet,
            code: KegCode::new("KEG099"),
        }
    );

    assert_eq!(wf.progress().map(|p| p.ratio()), Some(0.5));

    let request = wf.request_finish().unwrap();
    assert_eq!(request.count, 1);
    assert_eq!(wf.phase(), Phase::Confirming);

    let note = wf.confirm_finish().unwrap();
    assert_eq!(
        note,
        Notification::CollectionConfirmed {
            count: 1,
            outlet_name: "Downtown Bar".into(),
        }
    );
    assert!(wf.records().is_empty());
    assert!(wf.selected().is_none());
    assert_eq!(wf.phase(), Phase::NoOutletSelected);
}

#[test]
fn assignment_run_against_demo_directory() {
    let mut wf = Workflow::assignment(StaticDirectory::assignment_demo(), ManualScanner::new())
        .with_reselect_policy(ReselectPolicy::ResetSession);

    assert_eq!(wf.begin_scan(), Err(WorkflowError::NoOutletSelected));

    wf.select_outlet(&OutletId::new("4")).unwrap();
    for code in ["KEG200", "KEG201", "KEG200"] {
        wf.begin_scan().unwrap();
        let outcome = wf.submit_scan(code).unwrap();
        let note = wf.notification(&outcome);
        assert_eq!(note.is_success(), outcome.is_accepted());
    }
    assert_eq!(wf.records().len(), 2);

    wf.select_outlet(&OutletId::new("1")).unwrap();
    assert!(wf.records().is_empty());
}
