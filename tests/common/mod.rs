//! Grid-world benchmark model shared by the integration tests.
//!
//! A small rectangular grid the agent walks with four deterministic moves.
//! Entering the goal cell pays its reward, and the goal drains into an
//! absorbing `Done` state on the next step. Cells enumerate row by row with
//! `x` varying fastest, followed by `Done`.

use mdprs::{DecisionProcess, Observability, Support};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridState {
    At { x: i32, y: i32 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridAction {
    Up,
    Down,
    Left,
    Right,
}

pub struct GridWorld {
    width: i32,
    height: i32,
    goal: (i32, i32),
    goal_reward: f64,
    discount: f64,
}

impl GridWorld {
    /// The 2-wide, 3-tall benchmark with a 10.0 reward in the top-right cell.
    pub fn benchmark() -> Self {
        Self {
            width: 2,
            height: 3,
            goal: (2, 3),
            goal_reward: 10.0,
            discount: 0.95,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }
}

impl DecisionProcess for GridWorld {
    type State = GridState;
    type Action = GridAction;

    fn discount(&self) -> f64 {
        self.discount
    }

    fn states(&self) -> Vec<GridState> {
        let mut states = Vec::with_capacity((self.width * self.height + 1) as usize);
        for y in 1..=self.height {
            for x in 1..=self.width {
                states.push(GridState::At { x, y });
            }
        }
        states.push(GridState::Done);
        states
    }

    fn actions(&self) -> Vec<GridAction> {
        vec![
            GridAction::Up,
            GridAction::Down,
            GridAction::Left,
            GridAction::Right,
        ]
    }

    fn state_index(&self, state: &GridState) -> usize {
        match state {
            GridState::At { x, y } => ((y - 1) * self.width + (x - 1)) as usize,
            GridState::Done => (self.width * self.height) as usize,
        }
    }

    fn action_index(&self, action: &GridAction) -> usize {
        match action {
            GridAction::Up => 0,
            GridAction::Down => 1,
            GridAction::Left => 2,
            GridAction::Right => 3,
        }
    }

    fn transition(&self, state: &GridState, action: &GridAction) -> Support<'_, GridState> {
        let (x, y) = match state {
            GridState::At { x, y } => (*x, *y),
            GridState::Done => return Box::new(std::iter::once((GridState::Done, 1.0))),
        };
        if (x, y) == self.goal {
            return Box::new(std::iter::once((GridState::Done, 1.0)));
        }

        let (nx, ny) = match action {
            GridAction::Up => (x, y + 1),
            GridAction::Down => (x, y - 1),
            GridAction::Left => (x - 1, y),
            GridAction::Right => (x + 1, y),
        };
        let next = if self.contains(nx, ny) {
            GridState::At { x: nx, y: ny }
        } else {
            GridState::At { x, y }
        };
        Box::new(std::iter::once((next, 1.0)))
    }

    fn reward(&self, _state: &GridState, _action: &GridAction, next: &GridState) -> f64 {
        match next {
            GridState::At { x, y } if (*x, *y) == self.goal => self.goal_reward,
            _ => 0.0,
        }
    }

    fn is_terminal(&self, state: &GridState) -> bool {
        matches!(state, GridState::Done)
    }
}

/// Benchmark grid pretending its state is hidden behind observations, for
/// rejection tests.
pub struct FoggyGridWorld(pub GridWorld);

impl DecisionProcess for FoggyGridWorld {
    type State = GridState;
    type Action = GridAction;

    fn discount(&self) -> f64 {
        self.0.discount()
    }

    fn states(&self) -> Vec<GridState> {
        self.0.states()
    }

    fn actions(&self) -> Vec<GridAction> {
        self.0.actions()
    }

    fn state_index(&self, state: &GridState) -> usize {
        self.0.state_index(state)
    }

    fn action_index(&self, action: &GridAction) -> usize {
        self.0.action_index(action)
    }

    fn transition(&self, state: &GridState, action: &GridAction) -> Support<'_, GridState> {
        self.0.transition(state, action)
    }

    fn reward(&self, state: &GridState, action: &GridAction, next: &GridState) -> f64 {
        self.0.reward(state, action, next)
    }

    fn is_terminal(&self, state: &GridState) -> bool {
        self.0.is_terminal(state)
    }

    fn observability(&self) -> Observability {
        Observability::PartiallyObservable
    }
}
