//! Per-part parallax offsets.

use super::deck::Role;

/// Column offset for one part given a displacement and the session ratio.
///
/// Parts with a smaller [`Role::divisor`] travel farther, which reads as
/// being closer to the viewer.
pub fn part_offset(role: Role, displacement: f64, ratio: f64) -> f64 {
    displacement / (ratio * role.divisor())
}

/// Offsets for every role in `roles`, in order.
pub fn offsets<I>(roles: I, displacement: f64, ratio: f64) -> impl Iterator<Item = (Role, f64)>
where
    I: IntoIterator<Item = Role>,
{
    roles
        .into_iter()
        .map(move |role| (role, part_offset(role, displacement, ratio)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offsets_follow_divisor_table() {
        let ratio = 10.0;
        let d = 90.0;
        let got: Vec<(Role, f64)> = offsets(Role::ALL.iter().copied(), d, ratio).collect();
        let expect = [
            (Role::Logo, 9.0),
            (Role::Price, 9.0),
            (Role::Title, 10.0),
            (Role::Subtitle, 90.0 / 8.5),
            (Role::Image, 90.0 / 3.5),
            (Role::WishList, 90.0 / 8.5),
            (Role::Category, 90.0 / 6.5),
        ];
        for ((role, off), (want_role, want)) in got.into_iter().zip(expect) {
            assert_eq!(role, want_role);
            assert!(close(off, want), "{role:?}: {off} != {want}");
        }
    }

    #[test]
    fn image_moves_farthest_logo_least() {
        let image = part_offset(Role::Image, -40.0, 5.0).abs();
        let category = part_offset(Role::Category, -40.0, 5.0).abs();
        let logo = part_offset(Role::Logo, -40.0, 5.0).abs();
        assert!(image > category && category > logo);
    }

    #[test]
    fn infinite_ratio_collapses_offsets() {
        assert_eq!(part_offset(Role::Image, 250.0, f64::INFINITY), 0.0);
    }
}
