//! Test documents shared by the importer tests.

/// Geometries:
/// 0 `WrongPrimitives`, 1 `MeshVertexOnly`, 2 `MeshQuads`, 3 `MeshVertexNormals`,
/// 4 `Mesh`, 5 `MeshBadIndex`, 6 `MeshShortIndices`, 7 `SourceTests`.
pub const MESH_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_geometries>
    <geometry id="WrongPrimitives">
      <mesh>
        <source id="wp-positions">
          <float_array id="wp-positions-array" count="15">0 0 0 1 0 0 1 1 0 0 1 0 0.5 2 0</float_array>
          <technique_common>
            <accessor source="#wp-positions-array" count="5" stride="3"/>
          </technique_common>
        </source>
        <vertices id="wp-vertices">
          <input semantic="POSITION" source="#wp-positions"/>
        </vertices>
        <polylist count="1">
          <input semantic="VERTEX" source="#wp-vertices" offset="0"/>
          <vcount>5</vcount>
          <p>0 1 2 3 4</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="MeshVertexOnly">
      <mesh>
        <source id="vo-positions">
          <float_array id="vo-positions-array" count="12">0 0 0 1 0 0 1 1 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#vo-positions-array" count="4" stride="3"/>
          </technique_common>
        </source>
        <vertices id="vo-vertices">
          <input semantic="POSITION" source="#vo-positions"/>
        </vertices>
        <polylist count="2">
          <input semantic="VERTEX" source="#vo-vertices" offset="0"/>
          <vcount>3 3</vcount>
          <p>2 1 0 2 0 3</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="MeshQuads">
      <mesh>
        <source id="q-positions">
          <float_array id="q-positions-array" count="15">0 0 0 1 0 0 1 1 0 0 1 0 -1 0 0</float_array>
          <technique_common>
            <accessor source="#q-positions-array" count="5" stride="3"/>
          </technique_common>
        </source>
        <vertices id="q-vertices">
          <input semantic="POSITION" source="#q-positions"/>
        </vertices>
        <polylist count="3">
          <input semantic="VERTEX" source="#q-vertices" offset="0"/>
          <vcount>4 3 4</vcount>
          <p>0 1 2 3 4 0 3 0 1 2 3</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="MeshVertexNormals">
      <mesh>
        <source id="vn-positions">
          <float_array id="vn-positions-array" count="12">0 0 0 1 0 0 1 1 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#vn-positions-array" count="4" stride="3"/>
          </technique_common>
        </source>
        <source id="vn-normals">
          <float_array id="vn-normals-array" count="6">0 0 1 0 0 -1</float_array>
          <technique_common>
            <accessor source="#vn-normals-array" count="2" stride="3"/>
          </technique_common>
        </source>
        <vertices id="vn-vertices">
          <input semantic="POSITION" source="#vn-positions"/>
        </vertices>
        <polylist count="2">
          <input semantic="VERTEX" source="#vn-vertices" offset="0"/>
          <input semantic="NORMAL" source="#vn-normals" offset="1"/>
          <vcount>3 3</vcount>
          <p>0 0 1 0 2 0 0 1 2 0 3 0</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="Mesh">
      <mesh>
        <source id="m-positions">
          <float_array id="m-positions-array" count="12">0 0 0 1 0 0 1 1 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#m-positions-array" count="4" stride="3"/>
          </technique_common>
        </source>
        <source id="m-normals">
          <float_array id="m-normals-array" count="3">0 0 1</float_array>
          <technique_common>
            <accessor source="#m-normals-array" count="1" stride="3"/>
          </technique_common>
        </source>
        <source id="m-uv0">
          <float_array id="m-uv0-array" count="8">0 0 1 0 1 1 0 1</float_array>
          <technique_common>
            <accessor source="#m-uv0-array" count="4" stride="2"/>
          </technique_common>
        </source>
        <source id="m-uv1">
          <float_array id="m-uv1-array" count="3">0.5 0.25 0</float_array>
          <technique_common>
            <accessor source="#m-uv1-array" count="1" stride="3"/>
          </technique_common>
        </source>
        <source id="m-colors">
          <float_array id="m-colors-array" count="3">1 0 0</float_array>
          <technique_common>
            <accessor source="#m-colors-array" count="1" stride="3"/>
          </technique_common>
        </source>
        <vertices id="m-vertices">
          <input semantic="POSITION" source="#m-positions"/>
        </vertices>
        <polylist count="1">
          <input semantic="VERTEX" source="#m-vertices" offset="0"/>
          <input semantic="NORMAL" source="#m-normals" offset="1"/>
          <input semantic="TEXCOORD" source="#m-uv0" offset="2" set="0"/>
          <input semantic="TEXCOORD" source="#m-uv1" offset="3" set="1"/>
          <input semantic="COLOR" source="#m-colors" offset="4"/>
          <vcount>4</vcount>
          <p>0 0 0 0 0 1 0 1 0 0 2 0 2 0 0 3 0 3 0 0</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="MeshBadIndex">
      <mesh>
        <source id="bi-positions">
          <float_array id="bi-positions-array" count="12">0 0 0 1 0 0 1 1 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#bi-positions-array" count="4" stride="3"/>
          </technique_common>
        </source>
        <vertices id="bi-vertices">
          <input semantic="POSITION" source="#bi-positions"/>
        </vertices>
        <polylist count="1">
          <input semantic="VERTEX" source="#bi-vertices" offset="0"/>
          <vcount>3</vcount>
          <p>0 1 7</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="MeshShortIndices">
      <mesh>
        <source id="si-positions">
          <float_array id="si-positions-array" count="12">0 0 0 1 0 0 1 1 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#si-positions-array" count="4" stride="3"/>
          </technique_common>
        </source>
        <vertices id="si-vertices">
          <input semantic="POSITION" source="#si-positions"/>
        </vertices>
        <polylist count="2">
          <input semantic="VERTEX" source="#si-vertices" offset="0"/>
          <vcount>3 3</vcount>
          <p>0 1 2 0</p>
        </polylist>
      </mesh>
    </geometry>
    <geometry id="SourceTests">
      <mesh>
        <source id="more-elements">
          <float_array id="more-elements-array" count="8">0 1 2 9 3 4 5 9</float_array>
          <technique_common>
            <accessor source="#more-elements-array" count="2" stride="4"/>
          </technique_common>
        </source>
        <source id="wrong-total-count">
          <float_array id="wrong-total-count-array" count="5">0 1 2 3 4</float_array>
          <technique_common>
            <accessor source="#wrong-total-count-array" count="2" stride="3"/>
          </technique_common>
        </source>
      </mesh>
    </geometry>
  </library_geometries>
</COLLADA>"##;

/// Materials:
/// 0 `MaterialWrongProfile`, 1 `MaterialWrongShader`, 2 `MaterialPhong`,
/// 3 `MaterialTextured`, 4 `MaterialMissingTexture`, 5 `MaterialNoShininess`,
/// 6 `MaterialPartial`.
pub const MATERIAL_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_images>
    <image id="Diffuse"><init_from>diffuse.tga</init_from></image>
  </library_images>
  <library_effects>
    <effect id="wrong-profile-fx">
      <profile_GLSL>
        <technique sid="t"/>
      </profile_GLSL>
    </effect>
    <effect id="wrong-shader-fx">
      <profile_COMMON>
        <technique sid="common">
          <lambert>
            <diffuse><color>1 1 1 1</color></diffuse>
          </lambert>
        </technique>
      </profile_COMMON>
    </effect>
    <effect id="phong-fx">
      <profile_COMMON>
        <technique sid="common">
          <phong>
            <ambient><color>1 0 0 1</color></ambient>
            <diffuse><color>0 1 0 1</color></diffuse>
            <specular><color>0 0 1 1</color></specular>
            <shininess><float>50</float></shininess>
          </phong>
        </technique>
      </profile_COMMON>
    </effect>
    <effect id="textured-fx">
      <profile_COMMON>
        <newparam sid="diffuse-surface">
          <surface type="2D"><init_from>Diffuse</init_from></surface>
        </newparam>
        <newparam sid="diffuse-sampler">
          <sampler2D><source>diffuse-surface</source></sampler2D>
        </newparam>
        <technique sid="common">
          <phong>
            <ambient><color>0.1 0.1 0.1 1</color></ambient>
            <diffuse><texture texture="diffuse-sampler" texcoord="UVMap"/></diffuse>
            <specular><color>0.5 0.5 0.5 1</color></specular>
            <shininess><float>12.5</float></shininess>
          </phong>
        </technique>
      </profile_COMMON>
    </effect>
    <effect id="missing-texture-fx">
      <profile_COMMON>
        <technique sid="common">
          <phong>
            <ambient><color>0 0 0 1</color></ambient>
            <diffuse><texture texture="nope-sampler" texcoord="UVMap"/></diffuse>
            <specular><color>0 0 0 1</color></specular>
            <shininess><float>1</float></shininess>
          </phong>
        </technique>
      </profile_COMMON>
    </effect>
    <effect id="no-shininess-fx">
      <profile_COMMON>
        <technique sid="common">
          <phong>
            <diffuse><color>1 1 1 1</color></diffuse>
          </phong>
        </technique>
      </profile_COMMON>
    </effect>
    <effect id="partial-fx">
      <profile_GLSL>
        <technique sid="t"/>
      </profile_GLSL>
      <profile_COMMON>
        <technique sid="common">
          <phong>
            <diffuse><color>0.25 0.5 0.75</color></diffuse>
            <shininess><float>8</float></shininess>
          </phong>
          <extra/>
        </technique>
      </profile_COMMON>
    </effect>
  </library_effects>
  <library_materials>
    <material id="MaterialWrongProfile"><instance_effect url="#wrong-profile-fx"/></material>
    <material id="MaterialWrongShader"><instance_effect url="#wrong-shader-fx"/></material>
    <material id="MaterialPhong"><instance_effect url="#phong-fx"/></material>
    <material id="MaterialTextured"><instance_effect url="#textured-fx"/></material>
    <material id="MaterialMissingTexture"><instance_effect url="#missing-texture-fx"/></material>
    <material id="MaterialNoShininess"><instance_effect url="#no-shininess-fx"/></material>
    <material id="MaterialPartial"><instance_effect url="#partial-fx"/></material>
  </library_materials>
</COLLADA>"##;

/// Textures, in sampler order:
/// 0 `tex-sampler`, 1 `tex-explicit`, 2 `tex-none`, 3 `tex-cube`,
/// 4 `tex-bad-state`, 5 `tex-missing-image`, 6 `tex-rect`.
pub const TEXTURE_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_images>
    <image id="OtherImage"><init_from>other.tga</init_from></image>
    <image id="TexImage"><init_from>textures/tex.tga</init_from></image>
  </library_images>
  <library_effects>
    <effect id="fx">
      <profile_COMMON>
        <newparam sid="tex-surface">
          <surface type="2D"><init_from>TexImage</init_from></surface>
        </newparam>
        <newparam sid="missing-surface">
          <surface type="2D"><init_from>NoSuchImage</init_from></surface>
        </newparam>
        <newparam sid="tex-sampler">
          <sampler2D><source>tex-surface</source></sampler2D>
        </newparam>
        <newparam sid="tex-explicit">
          <sampler2D>
            <source>tex-surface</source>
            <wrap_s>MIRROR</wrap_s>
            <wrap_t>CLAMP</wrap_t>
            <wrap_p>BORDER</wrap_p>
            <minfilter>LINEAR</minfilter>
            <magfilter>NEAREST</magfilter>
            <mipfilter>LINEAR</mipfilter>
          </sampler2D>
        </newparam>
        <newparam sid="tex-none">
          <sampler2D>
            <source>tex-surface</source>
            <wrap_s>NONE</wrap_s>
            <wrap_t>WRAP</wrap_t>
            <wrap_p>NONE</wrap_p>
            <minfilter>NONE</minfilter>
            <magfilter>NONE</magfilter>
            <mipfilter>NONE</mipfilter>
          </sampler2D>
        </newparam>
        <newparam sid="tex-cube">
          <samplerCUBE><source>tex-surface</source></samplerCUBE>
        </newparam>
        <newparam sid="tex-bad-state">
          <sampler2D>
            <source>tex-surface</source>
            <wrap_s>SPIRAL</wrap_s>
          </sampler2D>
        </newparam>
        <newparam sid="tex-missing-image">
          <sampler2D><source>missing-surface</source></sampler2D>
        </newparam>
        <newparam sid="tex-rect">
          <samplerRECT><source>tex-surface</source></samplerRECT>
        </newparam>
      </profile_COMMON>
    </effect>
  </library_effects>
</COLLADA>"##;

/// Images: 0 `UnsupportedImage` (jpg), 1 `Image` (tga).
pub const IMAGE_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_images>
    <image id="UnsupportedImage"><init_from>image.jpg</init_from></image>
    <image id="Image"><init_from>image.tga</init_from></image>
  </library_images>
</COLLADA>"##;

/// Two visual scenes, the second one being the default.
///
/// Objects, in allocation order:
/// 0 `Camera`, 1 `Mesh`, 2 `Light` (child of `Camera`), 3 `Group`,
/// 4 `WrongInstance`, 5 `MissingMesh`, 6 `MissingMaterial`, 7 `Unbound`
/// (children of `Group`). `Hidden` sits under a failing node and is never
/// allocated.
pub const SCENE_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_cameras>
    <camera id="Camera0"/>
    <camera id="Camera1"/>
    <camera id="CameraMain"/>
  </library_cameras>
  <library_lights>
    <light id="Light0"/>
    <light id="SunLight"/>
  </library_lights>
  <library_materials>
    <material id="Material0"/>
    <material id="Steel"/>
  </library_materials>
  <library_geometries>
    <geometry id="Geometry0"/>
    <geometry id="Geometry1"/>
    <geometry id="Cube"/>
  </library_geometries>
  <library_visual_scenes>
    <visual_scene id="Scene">
      <node id="Camera" name="Camera">
        <instance_camera url="#CameraMain"/>
        <node id="Light" name="Light">
          <translate>0 0 5</translate>
          <instance_light url="#SunLight"/>
        </node>
      </node>
      <node id="Mesh" name="Mesh">
        <translate>1 2 3</translate>
        <rotate>0 0 1 60</rotate>
        <rotate>0 1 0 90</rotate>
        <rotate>1 0 0 120</rotate>
        <scale>3 4 5</scale>
        <instance_geometry url="#Cube">
          <bind_material>
            <technique_common>
              <instance_material symbol="Steel-material" target="#Steel"/>
            </technique_common>
          </bind_material>
        </instance_geometry>
      </node>
    </visual_scene>
    <visual_scene id="Scene2">
      <node id="Group" name="Group">
        <node id="WrongInstance">
          <instance_controller url="#Skin"/>
          <node id="Hidden"/>
        </node>
        <node id="MissingMesh">
          <instance_geometry url="#InexistentMesh"/>
        </node>
        <node id="MissingMaterial">
          <instance_geometry url="#Cube">
            <bind_material>
              <technique_common>
                <instance_material symbol="m" target="#InexistentMaterial"/>
              </technique_common>
            </bind_material>
          </instance_geometry>
        </node>
        <node id="Unbound">
          <matrix>1 0 0 5 0 1 0 6 0 0 1 7 0 0 0 1</matrix>
          <instance_geometry url="#Cube"/>
        </node>
      </node>
    </visual_scene>
  </library_visual_scenes>
  <scene>
    <instance_visual_scene url="#Scene2"/>
  </scene>
</COLLADA>"##;

/// One scene with roots `n0` (children `a`, `b`) and `n1`.
pub const TREE_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <library_visual_scenes>
    <visual_scene id="Tree">
      <node id="n0">
        <node id="a"/>
        <node id="b"/>
      </node>
      <node id="n1"/>
    </visual_scene>
  </library_visual_scenes>
  <scene>
    <instance_visual_scene url="#Nope"/>
  </scene>
</COLLADA>"##;

/// A single triangle placed in a single scene.
pub const MINIMAL_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <asset>
    <up_axis>Z_UP</up_axis>
  </asset>
  <library_geometries>
    <geometry id="Triangle">
      <mesh>
        <source id="tri-positions">
          <float_array id="tri-positions-array" count="9">0 0 0 1 0 0 0 1 0</float_array>
          <technique_common>
            <accessor source="#tri-positions-array" count="3" stride="3">
              <param name="X" type="float"/>
              <param name="Y" type="float"/>
              <param name="Z" type="float"/>
            </accessor>
          </technique_common>
        </source>
        <vertices id="tri-vertices">
          <input semantic="POSITION" source="#tri-positions"/>
        </vertices>
        <polylist count="1">
          <input semantic="VERTEX" source="#tri-vertices" offset="0"/>
          <vcount>3</vcount>
          <p>0 1 2</p>
        </polylist>
      </mesh>
    </geometry>
  </library_geometries>
  <library_visual_scenes>
    <visual_scene id="Scene">
      <node id="TriangleNode">
        <instance_geometry url="#Triangle"/>
      </node>
    </visual_scene>
  </library_visual_scenes>
  <scene>
    <instance_visual_scene url="#Scene"/>
  </scene>
</COLLADA>"##;

pub const WRONG_NAMESPACE_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2008/03/COLLADASchema" version="1.5.0"/>"##;

pub const WRONG_VERSION_DAE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.0"/>"##;
