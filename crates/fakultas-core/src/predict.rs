use crate::model::Faculty;

/// Maps three subject scores to a faculty.
///
/// A subject wins only when its score is strictly greater than both others.
/// Any tie at the maximum (including all three equal) yields
/// [`Faculty::TidakDiketahui`]; there is no secondary tie-break.
pub fn predict(biology: i64, physics: i64, english: i64) -> Faculty {
    if biology > physics && biology > english {
        Faculty::Kedokteran
    } else if physics > biology && physics > english {
        Faculty::Teknik
    } else if english > biology && english > physics {
        Faculty::Bahasa
    } else {
        Faculty::TidakDiketahui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_maximum_picks_faculty() {
        assert_eq!(predict(90, 70, 60), Faculty::Kedokteran);
        assert_eq!(predict(60, 90, 70), Faculty::Teknik);
        assert_eq!(predict(60, 70, 90), Faculty::Bahasa);
    }

    #[test]
    fn ties_at_maximum_are_unknown() {
        assert_eq!(predict(80, 80, 60), Faculty::TidakDiketahui);
        assert_eq!(predict(60, 80, 80), Faculty::TidakDiketahui);
        assert_eq!(predict(80, 60, 80), Faculty::TidakDiketahui);
        assert_eq!(predict(50, 50, 50), Faculty::TidakDiketahui);
    }

    #[test]
    fn ties_below_maximum_do_not_matter() {
        assert_eq!(predict(90, 50, 50), Faculty::Kedokteran);
        assert_eq!(predict(50, 90, 50), Faculty::Teknik);
        assert_eq!(predict(50, 50, 90), Faculty::Bahasa);
    }

    #[test]
    fn negative_and_extreme_scores() {
        assert_eq!(predict(-1, -2, -3), Faculty::Kedokteran);
        assert_eq!(predict(i64::MIN, i64::MAX, 0), Faculty::Teknik);
        assert_eq!(predict(i64::MAX, i64::MAX, i64::MIN), Faculty::TidakDiketahui);
    }

    #[test]
    fn unknown_exactly_when_maximum_is_shared() {
        for b in -2..=2 {
            for p in -2..=2 {
                for e in -2..=2 {
                    let max = b.max(p).max(e);
                    let holders = [b, p, e].iter().filter(|&&s| s == max).count();
                    let got = predict(b, p, e);
                    assert_eq!(
                        got == Faculty::TidakDiketahui,
                        holders > 1,
                        "({b}, {p}, {e}) -> {got}"
                    );
                }
            }
        }
    }
}
