//! Integration tests for complete tour guide sessions.
//!
//! These tests drive the public controller API the way a presentation layer
//! would: authoring tours, browsing them and walking one end to end while
//! checking the output after every step.
//!
//! Run with: `cargo test --test session_integration`

use tourguide::{
    Annotation, Chunk, Controller, ControllerConfig, ControllerError, ErrorCategory, ModeKind,
    TourSummary,
};

// ============================================================================
// Helper Functions
// ============================================================================

const WAYPOINT_RADIUS: f64 = 10.0;
const WAYPOINT_SEPARATION: f64 = 25.0;

fn controller() -> Controller {
    Controller::new(ControllerConfig::new(WAYPOINT_RADIUS, WAYPOINT_SEPARATION))
}

fn ann(text: &str) -> Annotation {
    Annotation::new(text)
}

/// Assert the output has `count` chunks and chunk `index` equals `expected`.
fn check_output(controller: &Controller, count: usize, index: usize, expected: Chunk) {
    let output = controller.output();
    assert_eq!(output.len(), count, "number of chunks in {:?}", output);
    assert_eq!(output[index], expected);
}

fn create_header(title: &str, legs: usize, waypoints: usize) -> Chunk {
    Chunk::CreateHeader {
        title: title.to_string(),
        leg_count: legs,
        waypoint_count: waypoints,
    }
}

fn follow_header(title: &str, stage: usize, waypoints: usize) -> Chunk {
    Chunk::FollowHeader {
        title: title.to_string(),
        stage,
        waypoint_count: waypoints,
    }
}

fn overview(tours: &[(&str, &str)]) -> Chunk {
    Chunk::BrowseOverview {
        tours: tours
            .iter()
            .map(|(id, title)| TourSummary::new(*id, *title))
            .collect(),
    }
}

// Locations roughly based on a St Giles Cathedral reference.

fn add_one_point_tour(c: &mut Controller) {
    c.start_new_tour(
        "T1",
        "Informatics at UoE",
        ann("The Informatics Forum and Appleton Tower\n"),
    )
    .unwrap();
    check_output(c, 1, 0, create_header("Informatics at UoE", 0, 0));

    c.set_location(300.0, -500.0);

    c.add_leg(ann("Start at NE corner of George Square\n"))
        .unwrap();
    check_output(c, 1, 0, create_header("Informatics at UoE", 1, 0));

    c.add_waypoint(ann("Informatics Forum")).unwrap();
    check_output(c, 1, 0, create_header("Informatics at UoE", 1, 1));

    c.end_new_tour().unwrap();
}

fn add_two_point_tour(c: &mut Controller) {
    c.start_new_tour("T2", "Old Town", ann("From Edinburgh Castle to Holyrood\n"))
        .unwrap();
    check_output(c, 1, 0, create_header("Old Town", 0, 0));

    c.set_location(-500.0, 0.0);

    // Default leg added along with this waypoint
    c.add_waypoint(ann("Edinburgh Castle\n")).unwrap();
    check_output(c, 1, 0, create_header("Old Town", 1, 1));

    c.add_leg(ann("Royal Mile\n")).unwrap();
    check_output(c, 1, 0, create_header("Old Town", 2, 1));

    assert!(c.end_new_tour().is_err());

    c.set_location(1000.0, 300.0);
    c.add_waypoint(ann("Holyrood Palace\n")).unwrap();
    check_output(c, 1, 0, create_header("Old Town", 2, 2));

    c.end_new_tour().unwrap();
}

// ============================================================================
// Authoring
// ============================================================================

#[test]
fn test_no_tours() {
    let c = controller();
    check_output(&c, 1, 0, overview(&[]));
}

#[test]
fn test_add_one_point_tour() {
    let mut c = controller();
    add_one_point_tour(&mut c);
    assert_eq!(c.mode(), ModeKind::Browse);
}

#[test]
fn test_add_two_point_tour() {
    let mut c = controller();
    add_two_point_tour(&mut c);
    assert_eq!(c.catalog().get("T2").unwrap().waypoint_count(), 2);
}

#[test]
fn test_add_of_two_tours() {
    let mut c = controller();
    add_one_point_tour(&mut c);
    add_two_point_tour(&mut c);
    assert_eq!(c.catalog().len(), 2);
}

#[test]
fn test_create_tour_around_origin() {
    let mut c = controller();
    c.start_new_tour("01", "tour1", Annotation::DEFAULT).unwrap();
    check_output(&c, 1, 0, create_header("tour1", 0, 0));

    c.add_leg(Annotation::DEFAULT).unwrap();
    check_output(&c, 1, 0, create_header("tour1", 1, 0));

    c.set_location(0.0, 0.0);
    c.add_waypoint(Annotation::DEFAULT).unwrap();
    check_output(&c, 1, 0, create_header("tour1", 1, 1));

    // Bounce between the origin and each compass point, exactly one separation away
    let s = WAYPOINT_SEPARATION;
    let hops = [(-s, 0.0), (0.0, 0.0), (s, 0.0), (0.0, 0.0), (0.0, -s), (0.0, 0.0), (0.0, s)];
    for (n, (east, north)) in hops.iter().enumerate() {
        c.set_location(*east, *north);
        c.add_waypoint(Annotation::DEFAULT).unwrap();
        check_output(&c, 1, 0, create_header("tour1", n + 2, n + 2));
    }

    c.end_new_tour().unwrap();
    check_output(&c, 1, 0, overview(&[("01", "tour1")]));
}

#[test]
fn test_create_tour_failures() {
    let mut c = controller();
    c.start_new_tour("01", "tour1", Annotation::DEFAULT).unwrap();
    assert!(matches!(
        c.end_new_tour(),
        Err(ControllerError::NoWaypoints { .. })
    ));

    c.set_location(0.0, 0.0);
    c.add_waypoint(Annotation::DEFAULT).unwrap();
    c.add_leg(Annotation::DEFAULT).unwrap();
    assert!(matches!(
        c.end_new_tour(),
        Err(ControllerError::LegCountMismatch { .. })
    ));
    assert!(matches!(
        c.add_leg(Annotation::DEFAULT),
        Err(ControllerError::TooManyLegs { .. })
    ));

    let near = WAYPOINT_SEPARATION * 0.99;
    for (east, north) in [(-near, 0.0), (near, 0.0), (0.0, -near), (0.0, near)] {
        c.set_location(east, north);
        let err = c.add_waypoint(Annotation::DEFAULT).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Spacing);
    }
    assert_eq!(c.draft().unwrap().waypoint_count(), 1);
    assert_eq!(c.draft().unwrap().leg_count(), 2);

    c.set_location(0.0, WAYPOINT_SEPARATION);
    c.add_waypoint(Annotation::DEFAULT).unwrap();
    c.end_new_tour().unwrap();

    // Authoring commands are invalid in every other mode
    let check_authoring_rejected = |c: &mut Controller| {
        assert!(c.start_new_tour("02", "tour2", Annotation::DEFAULT).is_err());
        assert!(c.add_waypoint(Annotation::DEFAULT).is_err());
        assert!(c.add_leg(Annotation::DEFAULT).is_err());
        assert!(c.end_new_tour().is_err());
    };

    c.show_tours_overview().unwrap();
    assert!(c.add_waypoint(Annotation::DEFAULT).is_err());
    assert!(c.add_leg(Annotation::DEFAULT).is_err());
    assert!(c.end_new_tour().is_err());

    c.show_tour_details("01").unwrap();
    check_authoring_rejected(&mut c);
    assert_eq!(c.mode(), ModeKind::Details);

    c.follow_tour("01").unwrap();
    check_authoring_rejected(&mut c);
    assert_eq!(c.mode(), ModeKind::Follow);
}

// ============================================================================
// Browsing
// ============================================================================

#[test]
fn test_browsing_two_tours() {
    let mut c = controller();
    add_one_point_tour(&mut c);
    add_two_point_tour(&mut c);

    check_output(
        &c,
        1,
        0,
        overview(&[("T1", "Informatics at UoE"), ("T2", "Old Town")]),
    );

    assert!(matches!(
        c.show_tour_details("T3"),
        Err(ControllerError::TourNotFound { .. })
    ));
    c.show_tour_details("T1").unwrap();

    check_output(
        &c,
        1,
        0,
        Chunk::BrowseDetails {
            id: "T1".to_string(),
            title: "Informatics at UoE".to_string(),
            annotation: ann("The Informatics Forum and Appleton Tower\n"),
        },
    );
}

#[test]
fn test_overview_in_empty_browse_mode() {
    let mut c = controller();
    c.show_tours_overview().unwrap();
    check_output(&c, 1, 0, overview(&[]));
}

#[test]
fn test_overview_rejected_while_creating() {
    let mut c = controller();
    c.start_new_tour("01", "tour1", Annotation::DEFAULT).unwrap();
    assert_eq!(
        c.show_tours_overview(),
        Err(ControllerError::BrowseWhileCreating)
    );
}

#[test]
fn test_tour_details_failures() {
    let mut c = controller();
    assert!(c.show_tour_details("01").is_err());
    assert!(c.show_tour_details("").is_err());

    c.start_new_tour("01", "tour1", Annotation::DEFAULT).unwrap();
    c.add_waypoint(Annotation::DEFAULT).unwrap();
    c.end_new_tour().unwrap();

    c.start_new_tour("02", "tour2", Annotation::DEFAULT).unwrap();
    let err = c.show_tour_details("01").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Mode);
}

#[test]
fn test_reused_id_replaces_tour() {
    let mut c = controller();
    for title in ["first", "second"] {
        c.start_new_tour("T1", title, Annotation::DEFAULT).unwrap();
        c.add_waypoint(Annotation::DEFAULT).unwrap();
        c.end_new_tour().unwrap();
    }

    check_output(&c, 1, 0, overview(&[("T1", "second")]));
}

// ============================================================================
// Following
// ============================================================================

#[test]
fn test_follow_old_town_tour() {
    let mut c = controller();
    add_one_point_tour(&mut c);
    add_two_point_tour(&mut c);

    c.follow_tour("T2").unwrap();

    c.set_location(0.0, 0.0);
    check_output(&c, 3, 0, follow_header("Old Town", 0, 2));
    check_output(
        &c,
        3,
        1,
        Chunk::FollowLeg {
            annotation: Annotation::DEFAULT,
        },
    );
    check_output(
        &c,
        3,
        2,
        Chunk::FollowBearing {
            bearing: 270.0,
            distance: 500.0,
        },
    );

    c.set_location(-490.0, 0.0);
    check_output(&c, 4, 0, follow_header("Old Town", 1, 2));
    check_output(
        &c,
        4,
        1,
        Chunk::FollowWaypoint {
            annotation: ann("Edinburgh Castle\n"),
        },
    );
    check_output(
        &c,
        4,
        2,
        Chunk::FollowLeg {
            annotation: ann("Royal Mile\n"),
        },
    );
    check_output(
        &c,
        4,
        3,
        Chunk::FollowBearing {
            bearing: 79.0,
            distance: 1520.0,
        },
    );

    c.set_location(900.0, 300.0);
    check_output(&c, 3, 0, follow_header("Old Town", 1, 2));
    check_output(
        &c,
        3,
        1,
        Chunk::FollowLeg {
            annotation: ann("Royal Mile\n"),
        },
    );
    check_output(
        &c,
        3,
        2,
        Chunk::FollowBearing {
            bearing: 90.0,
            distance: 100.0,
        },
    );

    c.set_location(1000.0, 300.0);
    check_output(&c, 2, 0, follow_header("Old Town", 2, 2));
    check_output(
        &c,
        2,
        1,
        Chunk::FollowWaypoint {
            annotation: ann("Holyrood Palace\n"),
        },
    );

    c.end_selected_tour().unwrap();
    check_output(
        &c,
        1,
        0,
        overview(&[("T1", "Informatics at UoE"), ("T2", "Old Town")]),
    );
}

#[test]
fn test_follow_long_tour() {
    const WAYPOINTS: usize = 50;
    let s = WAYPOINT_SEPARATION;

    let mut c = controller();
    c.start_new_tour("01", "tour1", ann("tour_annotation")).unwrap();
    for i in 0..WAYPOINTS {
        c.set_location(0.0, i as f64 * s);
        c.add_leg(ann(&format!("leg{}", i))).unwrap();
        c.add_waypoint(ann(&format!("way{}", i))).unwrap();
    }
    c.end_new_tour().unwrap();

    c.show_tours_overview().unwrap();
    c.show_tour_details("01").unwrap();
    c.follow_tour("01").unwrap();

    for i in 0..=WAYPOINTS {
        c.set_location(0.0, (i as f64 - 1.0) * s);

        let expected = match i {
            0 => 3,
            WAYPOINTS => 2,
            _ => 4,
        };
        check_output(&c, expected, 0, follow_header("tour1", i, WAYPOINTS));

        if i < WAYPOINTS {
            let leg_index = if i > 0 { 2 } else { 1 };
            check_output(
                &c,
                expected,
                leg_index,
                Chunk::FollowLeg {
                    annotation: ann(&format!("leg{}", i)),
                },
            );
            check_output(
                &c,
                expected,
                expected - 1,
                Chunk::FollowBearing {
                    bearing: 0.0,
                    distance: s,
                },
            );
        }
        if i > 0 {
            check_output(
                &c,
                expected,
                1,
                Chunk::FollowWaypoint {
                    annotation: ann(&format!("way{}", i - 1)),
                },
            );
        }

        if i > 0 && i < WAYPOINTS {
            // Walk out of the reached waypoint's radius
            let east = WAYPOINT_RADIUS + 1.0;
            c.set_location(east, (i as f64 - 1.0) * s);
            check_output(&c, 3, 0, follow_header("tour1", i, WAYPOINTS));
            check_output(
                &c,
                3,
                1,
                Chunk::FollowLeg {
                    annotation: ann(&format!("leg{}", i)),
                },
            );
            let to_next = tourguide::Displacement::new(-east, s);
            check_output(
                &c,
                3,
                2,
                Chunk::FollowBearing {
                    bearing: to_next.bearing(),
                    distance: to_next.distance(),
                },
            );
        }
    }

    c.end_selected_tour().unwrap();
    check_output(&c, 1, 0, overview(&[("01", "tour1")]));

    // Following again starts over
    c.follow_tour("01").unwrap();
    assert_eq!(c.follow_progress().unwrap().stage(), 0);
    c.end_selected_tour().unwrap();
}

#[test]
fn test_follow_tour_failures() {
    let mut c = controller();
    c.start_new_tour("01", "title1", Annotation::DEFAULT).unwrap();
    c.add_waypoint(Annotation::DEFAULT).unwrap();
    assert!(c.follow_tour("01").is_err());
    assert!(c.end_selected_tour().is_err());
    c.end_new_tour().unwrap();

    c.show_tours_overview().unwrap();
    assert!(matches!(
        c.follow_tour("02"),
        Err(ControllerError::TourNotFound { .. })
    ));
    assert!(c.end_selected_tour().is_err());
    assert_eq!(c.mode(), ModeKind::Browse);

    c.show_tour_details("01").unwrap();
    assert!(c.follow_tour("02").is_err());
    assert!(c.end_selected_tour().is_err());
    assert_eq!(c.mode(), ModeKind::Details);

    c.follow_tour("01").unwrap();
    let err = c.follow_tour("01").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Mode);
}
