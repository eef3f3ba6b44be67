//! Reward-function fixtures

/// Speed-based reward function, the usual starting point of a submission
pub const REWARD_SPEED: &str = r#"
def reward_function(params):
    all_wheels_on_track = params['all_wheels_on_track']
    speed = params['speed']
    SPEED_THRESHOLD = 1.0

    if not all_wheels_on_track:
        reward = 1e-3
    elif speed < SPEED_THRESHOLD:
        reward = 0.5
    else:
        reward = 1.0

    return float(reward)
"#;

/// Centerline-following reward function, structurally unrelated to the speed one
pub const REWARD_CENTERLINE: &str = r#"
import math


class Centerline:
    MARKERS = 3

    def __init__(self, width):
        self.width = width

    def markers(self):
        return [self.width * k / 10 for k in range(self.MARKERS)]
"#;

/// `REWARD_SPEED` with one literal changed
pub fn reward_speed_tweaked() -> String {
    REWARD_SPEED.replace("SPEED_THRESHOLD = 1.0", "SPEED_THRESHOLD = 1.8")
}

/// A reward function replaying `pairs` literal waypoints, one per line
pub fn reward_with_waypoints(pairs: usize) -> String {
    let literals: String = (0..pairs)
        .map(|i| format!("WP_{i} = ({}.0, {}.5)\n", i, i + 1))
        .collect();
    format!("{literals}\ndef reward_function(params):\n    return 1.0\n")
}

/// A reward function using live waypoints only
pub const REWARD_DYNAMIC_WAYPOINTS: &str = r#"
def reward_function(params):
    waypoints = params['waypoints']
    closest_waypoints = params['closest_waypoints']
    next_point = waypoints[closest_waypoints[1]]
    prev_point = waypoints[closest_waypoints[0]]
    heading = params['heading']
    return 1.0 if abs(next_point[0] - prev_point[0]) < heading else 0.5
"#;
