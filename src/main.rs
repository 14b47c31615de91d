/*
 * Plexus Point-Cloud Animation
 *
 * A decorative 3D animation: spheres drift inside an invisible cube, bounce
 * off its walls, spin in place, and are joined by transient lines whenever
 * two of them come close enough together. The camera slowly orbits the cloud.
 *
 * The animation includes interactive sliders to adjust parameters in
 * real-time and can display debug information about the current state.
 */

use plexus::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
