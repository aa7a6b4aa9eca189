use compass_assistant::{CompassAssistant, CompassListener, SensorReading};
use nalgebra::Vector3;

struct ConsoleNeedle;

impl CompassListener for ConsoleNeedle {
    fn on_heading(&mut self, degrees: f32) {
        println!("heading: {:7.2}°", degrees);
    }

    fn on_smoothed_heading(&mut self, degrees: f32) {
        println!("smoothed: {:7.2}°", degrees);
    }

    fn on_started(&mut self) {
        println!("compass started");
    }

    fn on_stopped(&mut self) {
        println!("compass stopped");
    }
}

fn main() {
    let mut assistant = CompassAssistant::new().expect("valid default settings");
    assistant.add_listener(Box::new(ConsoleNeedle));
    assistant.start();

    let flat = Vector3::new(0.0, 0.0, 9.81); // device lying on a table

    for step in 0..20 {
        // this loop stands in for the platform sensor callbacks; replace
        // the synthetic vectors with actual accelerometer/magnetometer data
        let yaw = (340.0 + step as f32 * 2.5f32).to_radians(); // drifting across north
        let magnetometer = Vector3::new(-yaw.sin() * 22.0, yaw.cos() * 22.0, -41.0);

        assistant.handle_reading(SensorReading::accelerometer(flat, step));
        assistant.handle_reading(SensorReading::magnetometer(magnetometer, step));
    }

    assistant.stop();
}
