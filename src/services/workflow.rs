//! Assignment and collection workflows.
//!
//! One [`Workflow`] drives one screen: pick an outlet, scan codes one at a
//! time, and (for collections) finish with a confirmation step. Every event
//! runs to completion before the next is accepted, so there is never more
//! than one scan in flight.

use super::scanner::CodeScanner;
use super::validation::{finish_collection, validate_scan, FinishRequest, ScanContext};
use crate::domain::{
    Notification, Outlet, OutletId, Phase, Progress, ReselectPolicy, Result, ScanOutcome,
    ScanRecord, Session, WorkflowError, WorkflowKind,
};
use crate::repositories::OutletDirectory;
use chrono::{DateTime, Local};
use tracing::{debug, info, instrument, warn};

pub struct Workflow<D, S: CodeScanner> {
    kind: WorkflowKind,
    reselect: ReselectPolicy,
    directory: D,
    scanner: S,
    session: Session,
    phase: Phase,
    clock: fn() -> DateTime<Local>,
}

impl<D: OutletDirectory, S: CodeScanner> Workflow<D, S> {
    fn new(kind: WorkflowKind, reselect: ReselectPolicy, directory: D, scanner: S) -> Self {
        Self {
            kind,
            reselect,
            directory,
            scanner,
            session: Session::new(),
            phase: Phase::NoOutletSelected,
            clock: Local::now,
        }
    }

    /// Keeps the scanned list across reselection unless told otherwise.
    pub fn assignment(directory: D, scanner: S) -> Self {
        Self::new(
            WorkflowKind::Assignment,
            ReselectPolicy::KeepSession,
            directory,
            scanner,
        )
    }

    pub fn collection(directory: D, scanner: S) -> Self {
        Self::new(
            WorkflowKind::Collection,
            ReselectPolicy::ResetSession,
            directory,
            scanner,
        )
    }

    /// Collections always reset on reselection; the policy only applies to assignments.
    pub fn with_reselect_policy(mut self, policy: ReselectPolicy) -> Self {
        if self.kind == WorkflowKind::Assignment {
            self.reselect = policy;
        }
        self
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reselect_policy(&self) -> ReselectPolicy {
        self.reselect
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected(&self) -> Option<&Outlet> {
        self.session.outlet()
    }

    pub fn records(&self) -> &[ScanRecord] {
        self.session.records()
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn outlets(&self) -> &[Outlet] {
        self.directory.outlets()
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Picks the outlet to work against, replacing any earlier pick.
    #[instrument(skip(self), fields(kind = self.kind.as_str()))]
    pub fn select_outlet(&mut self, id: &OutletId) -> Result<&Outlet> {
        match self.phase {
            Phase::NoOutletSelected | Phase::OutletSelected => {}
            phase => {
                return Err(WorkflowError::InvalidPhase {
                    action: "select an outlet",
                    phase,
                })
            }
        }

        let outlet = self.directory.find(id)?.clone();
        info!(outlet = %outlet.name, policy = ?self.reselect, "Outlet selected");

        self.session = std::mem::take(&mut self.session).with_outlet(outlet, self.reselect);
        self.phase = Phase::OutletSelected;
        self.session.outlet().ok_or(WorkflowError::NoOutletSelected)
    }

    /// Enters scanning. Refused outright when no outlet is selected.
    pub fn begin_scan(&mut self) -> Result<()> {
        match self.phase {
            Phase::NoOutletSelected => Err(WorkflowError::NoOutletSelected),
            Phase::OutletSelected => {
                self.scanner.activate()?;
                self.phase = Phase::Scanning;
                debug!(kind = self.kind.as_str(), "Scanner activated");
                Ok(())
            }
            phase => Err(WorkflowError::InvalidPhase {
                action: "start scanning",
                phase,
            }),
        }
    }

    /// Closes the scanner without a scan. No-op outside scanning.
    pub fn cancel_scan(&mut self) {
        if self.phase == Phase::Scanning {
            self.release_scanner();
            debug!(kind = self.kind.as_str(), "Scan cancelled");
        }
    }

    /// Resolves the single decoded payload of the current scanning period.
    ///
    /// The scanner is released before validation, so a rejected scan leaves
    /// the workflow exactly where an accepted one would: back at
    /// [`Phase::OutletSelected`] with the session list untouched.
    #[instrument(skip(self), fields(kind = self.kind.as_str()))]
    pub fn submit_scan(&mut self, raw: &str) -> Result<ScanOutcome> {
        if self.phase != Phase::Scanning {
            return Err(WorkflowError::InvalidPhase {
                action: "process a scan",
                phase: self.phase,
            });
        }
        self.release_scanner();

        let ctx = ScanContext::new(&self.session, self.kind.checks_ownership());
        match validate_scan(raw, &ctx, (self.clock)()) {
            Ok(record) => {
                self.session = std::mem::take(&mut self.session).with_record(record.clone());
                info!(code = raw, total = self.session.len(), "Scan accepted");
                Ok(ScanOutcome::Accepted(record))
            }
            Err(reason) => {
                warn!(code = raw, %reason, "Scan rejected");
                Ok(ScanOutcome::Rejected {
                    reason,
                    code: raw.into(),
                })
            }
        }
    }

    /// Operator notification for a scan outcome of this workflow.
    pub fn notification(&self, outcome: &ScanOutcome) -> Notification {
        let outlet_name = self.selected().map(|o| o.name.as_str()).unwrap_or_default();
        Notification::from_outcome(outcome, outlet_name)
    }

    /// Collection progress; `None` for assignments or without a selection.
    pub fn progress(&self) -> Option<Progress> {
        if !self.kind.checks_ownership() {
            return None;
        }
        self.session.progress()
    }

    /// Asks to finish the collection. Moves to confirmation on success.
    #[instrument(skip(self))]
    pub fn request_finish(&mut self) -> Result<FinishRequest> {
        if self.kind != WorkflowKind::Collection {
            return Err(WorkflowError::InvalidPhase {
                action: "finish an assignment",
                phase: self.phase,
            });
        }
        match self.phase {
            Phase::NoOutletSelected | Phase::OutletSelected => {}
            phase => {
                return Err(WorkflowError::InvalidPhase {
                    action: "finish",
                    phase,
                })
            }
        }

        let request = finish_collection(&self.session)?;
        self.phase = Phase::Confirming;
        info!(count = request.count, outlet = %request.outlet_name, "Awaiting confirmation");
        Ok(request)
    }

    /// Confirms the pending finish: selection and records are cleared together.
    #[instrument(skip(self))]
    pub fn confirm_finish(&mut self) -> Result<Notification> {
        if self.phase != Phase::Confirming {
            return Err(WorkflowError::InvalidPhase {
                action: "confirm",
                phase: self.phase,
            });
        }

        let request = finish_collection(&self.session)?;
        self.session = std::mem::take(&mut self.session).cleared();
        self.phase = Phase::NoOutletSelected;
        info!(count = request.count, outlet = %request.outlet_name, "Collection confirmed");

        Ok(Notification::CollectionConfirmed {
            count: request.count,
            outlet_name: request.outlet_name,
        })
    }

    /// Backs out of confirmation with nothing changed.
    pub fn cancel_finish(&mut self) {
        if self.phase == Phase::Confirming {
            self.phase = Phase::OutletSelected;
            debug!("Finish cancelled");
        }
    }

    /// Returns to the initial state, dropping any selection and records.
    pub fn reset(&mut self) {
        if self.scanner.is_active() {
            self.scanner.deactivate();
        }
        self.session = std::mem::take(&mut self.session).cleared();
        self.phase = Phase::NoOutletSelected;
    }

    fn release_scanner(&mut self) {
        self.scanner.deactivate();
        self.phase = Phase::OutletSelected;
    }
}

impl<D, S: CodeScanner> Drop for Workflow<D, S> {
    fn drop(&mut self) {
        if self.scanner.is_active() {
            self.scanner.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rejection;
    use crate::repositories::StaticDirectory;
    use crate::services::ManualScanner;
    use chrono::TimeZone;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Scanner whose state outlives the workflow, for checking release on drop.
    #[derive(Clone, Default)]
    struct SharedScanner {
        active: Rc<Cell<bool>>,
        activations: Rc<Cell<u32>>,
    }

    impl CodeScanner for SharedScanner {
        fn activate(&mut self) -> Result<()> {
            self.active.set(true);
            self.activations.set(self.activations.get() + 1);
            Ok(())
        }

        fn deactivate(&mut self) {
            self.active.set(false);
        }

        fn is_active(&self) -> bool {
            self.active.get()
        }
    }

    struct BrokenScanner;

    impl CodeScanner for BrokenScanner {
        fn activate(&mut self) -> Result<()> {
            Err(WorkflowError::Scanner("camera unavailable".into()))
        }

        fn deactivate(&mut self) {}

        fn is_active(&self) -> bool {
            false
        }
    }

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap()
    }

    fn collection() -> Workflow<StaticDirectory, ManualScanner> {
        Workflow::collection(StaticDirectory::collection_demo(), ManualScanner::new())
            .with_clock(fixed_clock)
    }

    fn assignment() -> Workflow<StaticDirectory, ManualScanner> {
        Workflow::assignment(StaticDirectory::assignment_demo(), ManualScanner::new())
            .with_clock(fixed_clock)
    }

    fn scan<D: OutletDirectory, S: CodeScanner>(wf: &mut Workflow<D, S>, raw: &str) -> ScanOutcome {
        wf.begin_scan().unwrap();
        wf.submit_scan(raw).unwrap()
    }

    #[test]
    fn starts_with_nothing_selected() {
        let wf = collection();

        assert_eq!(wf.phase(), Phase::NoOutletSelected);
        assert!(wf.selected().is_none());
        assert!(wf.records().is_empty());
        assert_eq!(wf.progress(), None);
    }

    #[rstest]
    #[case::assignment(assignment())]
    #[case::collection(collection())]
    fn scanning_needs_a_selection(#[case] mut wf: Workflow<StaticDirectory, ManualScanner>) {
        assert_eq!(wf.begin_scan(), Err(WorkflowError::NoOutletSelected));
        assert!(!wf.scanner().is_active());
        assert_eq!(wf.phase(), Phase::NoOutletSelected);
    }

    #[test]
    fn payload_outside_scanning_is_refused() {
        let mut wf = collection();
        wf.select_outlet(&"2".into()).unwrap();

        assert_eq!(
            wf.submit_scan("KEG004"),
            Err(WorkflowError::InvalidPhase {
                action: "process a scan",
                phase: Phase::OutletSelected,
            })
        );
        assert!(wf.records().is_empty());
    }

    #[rstest]
    #[case::assignment(assignment())]
    #[case::collection(collection())]
    fn second_identical_scan_is_a_duplicate(
        #[case] mut wf: Workflow<StaticDirectory, ManualScanner>,
    ) {
        wf.select_outlet(&"1".into()).unwrap();

        assert!(scan(&mut wf, "KEG001").is_accepted());
        assert_eq!(
            scan(&mut wf, "KEG001"),
            ScanOutcome::Rejected {
                reason: Rejection::DuplicateScan,
                code: "KEG001".into(),
            }
        );
        assert_eq!(wf.records().len(), 1);
    }

    #[test]
    fn foreign_keg_is_never_collected() {
        let mut wf = collection();
        wf.select_outlet(&"2".into()).unwrap();
        scan(&mut wf, "KEG004");

        for raw in ["KEG001", "KEG099", "", "KEG004-X"] {
            let before = wf.records().to_vec();
            assert_eq!(
                scan(&mut wf, raw),
                ScanOutcome::Rejected {
                    reason: Rejection::NotOwnedByOutlet,
                    code: raw.into(),
                }
            );
            assert_eq!(wf.records(), before.as_slice());
        }
    }

    /// Assignment accepts any code for any outlet. This mirrors the field
    /// app's behaviour and is kept on purpose.
    #[test]
    fn assignment_does_not_check_ownership() {
        let mut wf = assignment();
        wf.select_outlet(&"4".into()).unwrap();

        assert!(scan(&mut wf, "KEG999").is_accepted());
        assert!(scan(&mut wf, "not-a-keg").is_accepted());
        assert_eq!(wf.records().len(), 2);
    }

    #[test]
    fn accepted_record_uses_clock() {
        let mut wf = collection();
        wf.select_outlet(&"2".into()).unwrap();

        let ScanOutcome::Accepted(record) = scan(&mut wf, "KEG005") else {
            panic!("expected acceptance");
        };
        assert_eq!(record.scanned_at, fixed_clock());
        assert_eq!(record.timestamp(), "10:30:00");
    }

    #[test]
    fn records_keep_scan_order() {
        let mut wf = collection();
        wf.select_outlet(&"3".into()).unwrap();
        for raw in ["KEG008", "KEG006", "KEG009"] {
            scan(&mut wf, raw);
        }

        let codes: Vec<_> = wf.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["KEG008", "KEG006", "KEG009"]);
    }

    #[test]
    fn scanner_is_released_on_every_exit() {
        let scanner = SharedScanner::default();
        let mut wf = Workflow::collection(StaticDirectory::collection_demo(), scanner.clone());
        wf.select_outlet(&"2".into()).unwrap();

        wf.begin_scan().unwrap();
        assert!(scanner.is_active());
        wf.submit_scan("KEG004").unwrap();
        assert!(!scanner.is_active());

        wf.begin_scan().unwrap();
        wf.submit_scan("KEG099").unwrap();
        assert!(!scanner.is_active());

        wf.begin_scan().unwrap();
        wf.cancel_scan();
        assert!(!scanner.is_active());
        assert_eq!(wf.phase(), Phase::OutletSelected);

        wf.begin_scan().unwrap();
        drop(wf);
        assert!(!scanner.is_active());
        assert_eq!(scanner.activations.get(), 4);
    }

    #[test]
    fn scanner_failure_keeps_outlet_selected() {
        let mut wf = Workflow::collection(StaticDirectory::collection_demo(), BrokenScanner);
        wf.select_outlet(&"1".into()).unwrap();

        assert_eq!(
            wf.begin_scan(),
            Err(WorkflowError::Scanner("camera unavailable".into()))
        );
        assert_eq!(wf.phase(), Phase::OutletSelected);
    }

    #[test]
    fn cannot_start_a_second_scan_while_scanning() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        wf.begin_scan().unwrap();

        assert!(matches!(
            wf.begin_scan(),
            Err(WorkflowError::InvalidPhase {
                phase: Phase::Scanning,
                ..
            })
        ));
    }

    #[test]
    fn reselection_while_scanning_is_refused() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        wf.begin_scan().unwrap();

        assert!(wf.select_outlet(&"2".into()).is_err());
        assert_eq!(wf.selected().map(|o| o.id.as_str()), Some("1"));
    }

    #[test]
    fn unknown_outlet_leaves_state_alone() {
        let mut wf = collection();
        wf.select_outlet(&"2".into()).unwrap();
        scan(&mut wf, "KEG004");

        assert_eq!(
            wf.select_outlet(&"77".into()).err(),
            Some(WorkflowError::OutletNotFound("77".into()))
        );
        assert_eq!(wf.selected().map(|o| o.id.as_str()), Some("2"));
        assert_eq!(wf.records().len(), 1);
    }

    #[test]
    fn collection_reselection_resets_records() {
        let mut wf = collection();
        wf.select_outlet(&"2".into()).unwrap();
        scan(&mut wf, "KEG004");

        wf.select_outlet(&"2".into()).unwrap();

        assert!(wf.records().is_empty());
        assert_eq!(wf.phase(), Phase::OutletSelected);
    }

    #[test]
    fn collection_ignores_keep_policy() {
        let wf = collection().with_reselect_policy(ReselectPolicy::KeepSession);

        assert_eq!(wf.reselect_policy(), ReselectPolicy::ResetSession);
    }

    #[rstest]
    #[case::keep(ReselectPolicy::KeepSession, 1)]
    #[case::reset(ReselectPolicy::ResetSession, 0)]
    fn assignment_reselection_follows_policy(
        #[case] policy: ReselectPolicy,
        #[case] remaining: usize,
    ) {
        let mut wf = assignment().with_reselect_policy(policy);
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG010");

        wf.select_outlet(&"3".into()).unwrap();

        assert_eq!(wf.records().len(), remaining);
        assert_eq!(wf.selected().map(|o| o.name.as_str()), Some("Sunset Restaurant"));
    }

    #[test]
    fn progress_stays_in_bounds_and_never_drops() {
        let mut wf = collection();
        wf.select_outlet(&"3".into()).unwrap();
        let mut last = wf.progress().unwrap().ratio();
        assert_eq!(last, 0.0);

        for raw in ["KEG006", "KEG006", "KEG001", "KEG007", "KEG008", "KEG009", "KEG009"] {
            scan(&mut wf, raw);
            let ratio = wf.progress().unwrap().ratio();
            assert!((0.0..=1.0).contains(&ratio));
            assert!(ratio >= last);
            last = ratio;
        }
        assert_eq!(last, 1.0);
        assert!(wf.progress().unwrap().is_complete());
    }

    #[test]
    fn assignment_has_no_progress() {
        let mut wf = assignment();
        wf.select_outlet(&"1".into()).unwrap();

        assert_eq!(wf.progress(), None);
    }

    #[test]
    fn empty_collection_cannot_finish() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();

        let err = wf.request_finish().unwrap_err();
        assert_eq!(err, WorkflowError::EmptySession);
        assert_eq!(err.notification(), Some(Notification::CollectionEmpty));
        assert_eq!(wf.phase(), Phase::OutletSelected);
    }

    #[test]
    fn confirming_clears_selection_and_records_together() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG001");
        scan(&mut wf, "KEG003");

        let request = wf.request_finish().unwrap();
        assert_eq!(request.count, 2);
        assert_eq!(wf.phase(), Phase::Confirming);

        let note = wf.confirm_finish().unwrap();
        assert_eq!(
            note,
            Notification::CollectionConfirmed {
                count: 2,
                outlet_name: "Corner Store".into(),
            }
        );
        assert!(wf.selected().is_none());
        assert!(wf.records().is_empty());
        assert_eq!(wf.phase(), Phase::NoOutletSelected);
    }

    #[test]
    fn cancelling_finish_changes_nothing() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG002");
        let before = wf.session().clone();

        wf.request_finish().unwrap();
        wf.cancel_finish();

        assert_eq!(wf.session(), &before);
        assert_eq!(wf.phase(), Phase::OutletSelected);
    }

    #[test]
    fn confirming_blocks_scanning_and_reselection() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG002");
        wf.request_finish().unwrap();

        assert!(wf.begin_scan().is_err());
        assert!(wf.select_outlet(&"2".into()).is_err());
        assert_eq!(wf.phase(), Phase::Confirming);
    }

    #[test]
    fn confirm_without_request_is_refused() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG002");

        assert!(matches!(
            wf.confirm_finish(),
            Err(WorkflowError::InvalidPhase { action: "confirm", .. })
        ));
        assert_eq!(wf.records().len(), 1);
    }

    #[test]
    fn assignment_has_no_finish() {
        let mut wf = assignment();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG001");

        assert!(wf.request_finish().is_err());
    }

    #[test]
    fn notification_names_selected_outlet() {
        let mut wf = assignment();
        wf.select_outlet(&"2".into()).unwrap();
        let outcome = scan(&mut wf, "KEG042");

        assert_eq!(
            wf.notification(&outcome),
            Notification::ScanAccepted {
                code: "KEG042".into(),
                outlet_name: "Downtown Bar".into(),
            }
        );
    }

    #[test]
    fn reset_releases_scanner_and_clears() {
        let mut wf = collection();
        wf.select_outlet(&"1".into()).unwrap();
        scan(&mut wf, "KEG001");
        wf.begin_scan().unwrap();

        wf.reset();

        assert!(!wf.scanner().is_active());
        assert!(wf.selected().is_none());
        assert!(wf.records().is_empty());
        assert_eq!(wf.phase(), Phase::NoOutletSelected);
    }
}
