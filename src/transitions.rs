//! Timed flip and slide drivers.
//!
//! Each transition runs as one spawned task: named phases separated by
//! awaited timer/frame futures, with the state machine updated through the
//! ticket once the animation has run its full duration. Transitions are never
//! cancelled mid-flight.

use crate::constants::{FLIP_GROW_START, FLIP_PHASE_MS, SETTLE_MS, SLIDE_MS};
use crate::core::{Face, FlipDirection, FlipTicket, Landing, SlideTicket, Transition, Viewer};
use crate::dom;
use crate::input::TouchTracker;
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;

pub async fn run(
    transition: Transition,
    viewer: Rc<RefCell<Viewer>>,
    stage: Rc<Stage>,
    touch: Rc<RefCell<TouchTracker>>,
) {
    match transition {
        Transition::Flip(t) => {
            log::info!("[flip] panel {} {:?}", t.index, t.direction);
            run_flip(t, &viewer, &stage).await;
        }
        Transition::Slide(t) => {
            log::info!("[slide] {} -> {}", t.from, t.to);
            run_slide(t, &viewer, &stage).await;
        }
    }
    // the next gesture starts from a clean slate
    touch.borrow_mut().end();
}

async fn run_flip(t: FlipTicket, viewer: &Rc<RefCell<Viewer>>, stage: &Stage) {
    let (source, target) = match t.direction {
        FlipDirection::ToBack => (Face::Front, Face::Back),
        FlipDirection::ToFront => (Face::Back, Face::Front),
    };
    stage.arm_flip(t.index);

    // ShrinkSource: the visible face collapses edge-on
    stage.set_face_scale(t.index, source, 0.0);
    dom::sleep_ms(FLIP_PHASE_MS).await;

    // GrowTarget: the other face grows from a sliver, stacked on top
    stage.set_face_scale(t.index, target, FLIP_GROW_START);
    stage.set_active_face(t.index, target);
    dom::next_frame().await;
    stage.set_face_scale(t.index, target, 1.0);
    dom::sleep_ms(FLIP_PHASE_MS).await;

    viewer.borrow_mut().finish_flip(t);
}

async fn run_slide(t: SlideTicket, viewer: &Rc<RefCell<Viewer>>, stage: &Stage) {
    // Present the destination's landing face before the stack moves. A forced
    // back face must appear without a flip animation.
    if t.landing == Landing::ForceBack {
        stage.snap_face(t.to, Face::Back);
    } else {
        stage.set_face(t.to, t.landing_face);
    }

    stage.slide_to(t.to);
    dom::sleep_ms(SLIDE_MS).await;

    {
        let mut v = viewer.borrow_mut();
        v.finish_slide(&t);
        for i in 0..v.panel_count() {
            stage.set_face(i, v.face_of(i));
        }
    }

    if t.landing == Landing::ForceBack {
        // Settle: residual gesture input must not flip the landed panel
        dom::sleep_ms(SETTLE_MS).await;
        viewer.borrow_mut().release_flip_lock(t.to);
    }
}
