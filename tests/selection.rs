// This is free and unencumbered software released into the public domain.

use asimov_camera_preview_module::shared::{
    ASPECT_TOLERANCE, Resolution, Target, negotiate, select_optimal,
};

fn sizes(list: &[(u32, u32)]) -> Vec<Resolution> {
    list.iter().copied().map(Resolution::from).collect()
}

// A typical phone's reported preview table, in platform order.
fn phone_preview_sizes() -> Vec<Resolution> {
    sizes(&[
        (1920, 1080),
        (1440, 1080),
        (1280, 960),
        (1280, 720),
        (960, 720),
        (800, 600),
        (720, 480),
        (640, 480),
        (352, 288),
        (320, 240),
        (176, 144),
    ])
}

fn targets() -> Vec<Target> {
    [(1, 1), (400, 300), (720, 1280), (1280, 720), (1080, 2340), (3, 4000), (4000, 3)]
        .into_iter()
        .map(|(w, h)| Target::new(w, h).unwrap())
        .collect()
}

#[test]
fn landscape_sizes_against_portrait_view_use_fallback() {
    let candidates = sizes(&[(640, 480), (1280, 720), (1920, 1080)]);
    let target = Target::new(720, 1280).unwrap();
    assert_eq!(select_optimal(&candidates, target), Some(Resolution::new(1920, 1080)));
}

#[test]
fn equal_ratio_candidates_pick_nearest_height() {
    let candidates = sizes(&[(320, 240), (640, 480)]);
    let target = Target::new(400, 300).unwrap();
    assert_eq!(select_optimal(&candidates, target), Some(Resolution::new(320, 240)));
}

#[test]
fn empty_candidates_never_select() {
    for target in targets() {
        assert_eq!(select_optimal(&[], target), None);
    }
}

#[test]
fn selection_is_always_a_candidate() {
    let candidates = phone_preview_sizes();
    for target in targets() {
        let selected = select_optimal(&candidates, target).unwrap();
        assert!(candidates.contains(&selected), "{selected} not offered");
    }
}

#[test]
fn aspect_matched_subset_is_preferred_when_present() {
    let candidates = phone_preview_sizes();
    for target in targets() {
        let matched: Vec<_> = candidates
            .iter()
            .filter(|c| {
                c.ratio()
                    .is_some_and(|r| (r - target.ratio()).abs() <= ASPECT_TOLERANCE)
            })
            .collect();
        let selected = select_optimal(&candidates, target).unwrap();
        if !matched.is_empty() {
            assert!(matched.contains(&&selected), "{selected} is not aspect-matched");
            let best = matched
                .iter()
                .map(|c| c.height.abs_diff(target.height()))
                .min()
                .unwrap();
            assert_eq!(selected.height.abs_diff(target.height()), best);
        }
    }
}

#[test]
fn earlier_candidate_wins_equal_height_distance() {
    // Both are 4:3 and 120px away from the target height.
    let candidates = sizes(&[(480, 360), (800, 600)]);
    let target = Target::new(640, 480).unwrap();
    assert_eq!(select_optimal(&candidates, target), Some(Resolution::new(480, 360)));

    let reversed = sizes(&[(800, 600), (480, 360)]);
    assert_eq!(select_optimal(&reversed, target), Some(Resolution::new(800, 600)));
}

#[test]
fn repeated_calls_agree() {
    let candidates = phone_preview_sizes();
    for target in targets() {
        assert_eq!(
            select_optimal(&candidates, target),
            select_optimal(&candidates, target)
        );
    }
}

#[test]
fn picture_size_is_chained_from_preview() {
    let preview = phone_preview_sizes();
    let picture = sizes(&[(4032, 3024), (4032, 2268), (3264, 2448), (1920, 1080)]);
    let view = Target::new(1280, 720).unwrap();

    let result = negotiate(&preview, &picture, view);
    assert_eq!(result.preview, Some(Resolution::new(1280, 720)));
    // 16:9 preview pulls a 16:9 picture even though 4:3 sizes come first.
    assert_eq!(result.picture, Some(Resolution::new(1920, 1080)));
}
