pub mod in_house;
pub mod left_of;
pub mod next_to;
pub mod same_house;
