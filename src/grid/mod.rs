mod model;
mod month;
mod periods;
mod widget;
pub(crate) use self::model::GridState;
pub(crate) use self::widget::PtoGrid;
