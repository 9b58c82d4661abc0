use drive_time::contracts::calculate::DriveTimeCalculator;

pub struct Application {
    pub drive_time: DriveTimeCalculator,
}

impl Application {
    pub fn new(drive_time: DriveTimeCalculator) -> Self {
        Application { drive_time }
    }
}
